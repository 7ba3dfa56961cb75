use platformer::compute::init_state;
use platformer::constants::GROUND_Y;
use platformer::entities::*;

#[test]
fn rect_overlap_is_strict() {
    let a = Rect::new(0.0, 0.0, 10.0, 10.0);
    assert!(a.intersects(&Rect::new(5.0, 5.0, 10.0, 10.0)));
    assert!(a.intersects(&Rect::new(-5.0, -5.0, 10.0, 10.0)));
    // Sharing an edge is not an overlap
    assert!(!a.intersects(&Rect::new(10.0, 0.0, 10.0, 10.0)));
    assert!(!a.intersects(&Rect::new(0.0, 10.0, 10.0, 10.0)));
    // Overlap on one axis only
    assert!(!a.intersects(&Rect::new(5.0, 20.0, 10.0, 10.0)));
}

#[test]
fn rect_overlap_is_symmetric() {
    let a = Rect::new(0.0, 0.0, 30.0, 30.0);
    let b = Rect::new(25.0, 29.0, 5.0, 5.0);
    assert_eq!(a.intersects(&b), b.intersects(&a));
    assert!(a.intersects(&b));
}

#[test]
fn rect_edges_and_centre() {
    let r = Rect::new(50.0, 350.0, 30.0, 30.0);
    assert_eq!(r.right(), 80.0);
    assert_eq!(r.bottom(), 380.0);
    assert_eq!(r.centre(), (65.0, 365.0));
}

#[test]
fn player_on_ground() {
    let mut p = Player::at_start();
    assert!(p.on_ground());
    p.body.y = GROUND_Y - 0.5;
    assert!(!p.on_ground());
}

#[test]
fn fireball_launch_point() {
    let mut p = Player::at_start();
    p.body.y = 200.0;
    let f = Fireball::launched_by(&p);
    assert_eq!(f.body.x, p.body.right());
    assert_eq!(f.body.y, 215.0);
    assert!(f.vx > 0.0);
}

#[test]
fn entities_in_draw_order() {
    let mut s = init_state(Ruleset::Classic);
    s.enemies.push(Enemy {
        body: Rect::new(400.0, GROUND_Y, 30.0, 30.0),
        vx: -2.0,
    });
    s.power_ups.push(PowerUp {
        body: Rect::new(500.0, 290.0, 20.0, 20.0),
        vx: -2.0,
    });
    s.fireballs.push(Fireball::launched_by(&s.player));

    let kinds: Vec<EntityKind> = s.entities().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            EntityKind::Flag,
            EntityKind::Player,
            EntityKind::Enemy,
            EntityKind::PowerUp,
            EntityKind::Fireball,
        ]
    );
}

#[test]
fn entity_view_exposes_body() {
    let s = init_state(Ruleset::Classic);
    let player = s
        .entities()
        .find(|e| e.kind() == EntityKind::Player)
        .map(|e| *e.body());
    assert_eq!(player, Some(s.player.body));
}

#[test]
fn game_state_clone_is_independent() {
    let original = init_state(Ruleset::Arcade);
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.body.x = 99.0;
    cloned.score = 999;
    cloned.enemies.push(Enemy {
        body: Rect::new(5.0, 5.0, 30.0, 30.0),
        vx: -2.0,
    });

    assert_eq!(original.player.body.x, 50.0);
    assert_eq!(original.score, 0);
    assert!(original.enemies.is_empty());
}
