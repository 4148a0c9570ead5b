use perch_geom::{boundary, is_usable, Edges, Rect, Viewport};

// ============================================================================
// Rect Tests
// ============================================================================

#[test]
fn test_rect_derived_edges() {
    let rect = Rect::new(10.0, 20.0, 30.0, 40.0);

    assert_eq!(rect.left(), 10.0);
    assert_eq!(rect.top(), 20.0);
    assert_eq!(rect.right(), 40.0);
    assert_eq!(rect.bottom(), 60.0);
    assert_eq!(rect.center(), (25.0, 40.0));
}

#[test]
fn test_rect_edge_identities() {
    let rects = [
        Rect::new(0.0, 0.0, 0.0, 0.0),
        Rect::new(-15.5, 3.25, 100.0, 0.5),
        Rect::new(350.0, 350.0, 20.0, 20.0),
        Rect::new(1.0e4, -2.0e3, 640.0, 480.0),
    ];

    for rect in rects {
        assert_eq!(rect.right() - rect.left(), rect.width, "{:?}", rect);
        assert_eq!(rect.bottom() - rect.top(), rect.height, "{:?}", rect);
    }
}

#[test]
fn test_rect_negative_size_is_kept() {
    let rect = Rect::new(10.0, 10.0, -5.0, -5.0);

    assert_eq!(rect.width, -5.0);
    assert_eq!(rect.right(), 5.0);
    assert!(rect.is_empty());
}

#[test]
fn test_rect_structural_equality() {
    assert_eq!(Rect::new(1.0, 2.0, 3.0, 4.0), Rect::new(1.0, 2.0, 3.0, 4.0));
    assert_ne!(Rect::new(1.0, 2.0, 3.0, 4.0), Rect::new(1.0, 2.0, 3.0, 5.0));
}

#[test]
fn test_rect_shrink() {
    let rect = Rect::from_size(100.0, 100.0).shrink(Edges::new(5.0, 10.0, 15.0, 20.0));

    assert_eq!(rect, Rect::new(20.0, 5.0, 70.0, 80.0));
}

#[test]
fn test_rect_contains_rect() {
    let outer = Rect::new(0.0, 0.0, 100.0, 100.0);

    assert!(outer.contains_rect(&Rect::new(0.0, 0.0, 100.0, 100.0)));
    assert!(outer.contains_rect(&Rect::new(10.0, 10.0, 20.0, 20.0)));
    assert!(!outer.contains_rect(&Rect::new(90.0, 10.0, 20.0, 20.0)));
}

#[test]
fn test_rect_overflow() {
    let boundary = Rect::new(0.0, 0.0, 400.0, 400.0);

    let inside = Rect::new(10.0, 10.0, 100.0, 100.0);
    assert_eq!(inside.overflow(&boundary), Edges::default());

    let past_corner = Rect::new(350.0, -20.0, 100.0, 40.0);
    let overflow = past_corner.overflow(&boundary);
    assert_eq!(overflow.top, 20.0);
    assert_eq!(overflow.right, 50.0);
    assert_eq!(overflow.bottom, 0.0);
    assert_eq!(overflow.left, 0.0);
    assert_eq!(overflow.total(), 70.0);
}

// ============================================================================
// Boundary Tests
// ============================================================================

#[test]
fn test_boundary_without_insets() {
    let rect = boundary(Viewport::new(400.0, 800.0), Edges::default());

    assert_eq!(rect, Rect::new(0.0, 0.0, 400.0, 800.0));
}

#[test]
fn test_boundary_with_safe_area_insets() {
    let rect = boundary(Viewport::new(390.0, 844.0), Edges::new(47.0, 0.0, 34.0, 0.0));

    assert_eq!(rect.x, 0.0);
    assert_eq!(rect.y, 47.0);
    assert_eq!(rect.width, 390.0);
    assert_eq!(rect.height, 763.0); // 844 - 47 - 34
}

#[test]
fn test_boundary_with_uniform_margin() {
    let rect = boundary(Viewport::new(400.0, 400.0), Edges::all(8.0));

    assert_eq!(rect, Rect::new(8.0, 8.0, 384.0, 384.0));
}

#[test]
fn test_boundary_usability() {
    assert!(is_usable(&Rect::new(0.0, 0.0, 400.0, 400.0)));
    assert!(!is_usable(&Rect::default()), "zero-sized boundary before first layout");
    assert!(!is_usable(&boundary(Viewport::new(10.0, 10.0), Edges::all(8.0))));
    assert!(!is_usable(&Rect::new(0.0, 0.0, f32::NAN, 10.0)));
}
