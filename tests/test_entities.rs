use dodge_hurdles::entities::*;

#[test]
fn rect_edges() {
    let r = Rect::new(10, 20, 30, 40);
    assert_eq!(r.right(), 40);
    assert_eq!(r.bottom(), 60);
}

#[test]
fn rect_intersects_on_overlap() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(a.intersects(&Rect::new(5, 5, 10, 10)));
    assert!(a.intersects(&Rect::new(0, 0, 10, 10)));
    // Containment counts
    assert!(a.intersects(&Rect::new(2, 2, 1, 1)));
}

#[test]
fn rect_touching_edges_do_not_intersect() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(!a.intersects(&Rect::new(10, 0, 10, 10))); // right edge
    assert!(!a.intersects(&Rect::new(0, 10, 10, 10))); // bottom edge
    assert!(!a.intersects(&Rect::new(-10, 0, 10, 10))); // left edge
    assert!(!a.intersects(&Rect::new(0, -10, 10, 10))); // top edge
}

#[test]
fn player_color_cycles_without_wrapping() {
    assert_eq!(PlayerColor::Red.next(), PlayerColor::Blue);
    assert_eq!(PlayerColor::Blue.prev(), PlayerColor::Red);
    assert_eq!(PlayerColor::Red.prev(), PlayerColor::Red);
    assert_eq!(PlayerColor::Yellow.next(), PlayerColor::Yellow);
    assert_eq!(PlayerColor::default(), PlayerColor::Red);
}

#[test]
fn player_starts_on_the_floor() {
    let p = Player::new(PlayerColor::Green);
    assert_eq!(p.rect, Rect::new(200, 420, 40, 80));
    assert_eq!(p.color, PlayerColor::Green);
}

#[test]
fn spawned_things_sit_just_above_the_top() {
    let s = Star::above(100);
    assert_eq!(s.rect, Rect::new(100, -50, 25, 50));
    assert_eq!(s.rect.bottom(), 0);

    let p = PowerUp::above(60);
    assert_eq!(p.rect, Rect::new(60, -30, 30, 30));
}

#[test]
fn session_state_clone_is_independent() {
    let original = SessionState {
        player: Player::new(PlayerColor::Red),
        stars: Vec::new(),
        power_ups: Vec::new(),
        score: 0,
        high_score: 0,
        best_at_start: 0,
        difficulty: Difficulty::initial(),
        spawn_clock_ms: 0,
        elapsed_ms: 0,
        shield: None,
        status: SessionStatus::Running,
        frame: 0,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.rect.x = 99;
    cloned.score = 999;
    cloned.stars.push(Star::above(5));
    cloned.shield = Some(Shield { activated_at_ms: 10 });

    assert_eq!(original.player.rect.x, 200);
    assert_eq!(original.score, 0);
    assert!(original.stars.is_empty());
    assert!(!original.shield_active());
    assert!(cloned.shield_active());
}
