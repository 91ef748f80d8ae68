use super::{Axis, AxisGeometry, HorizontalAxis, VerticalAxis};
use stackpanel_ui_graphics::{Point, Rect, Size};

#[test]
fn vertical_extent_is_y_and_height() {
    let axis = Axis::Vertical.geometry();
    let rect = Rect::new(5.0, 10.0, 50.0, 20.0);
    assert_eq!(axis.extent_start(&rect), 10.0);
    assert_eq!(axis.extent_end(&rect), 30.0);
    assert_eq!(axis.breadth(&rect), 50.0);
    assert_eq!(axis.breadth_start(&rect), 5.0);
}

#[test]
fn horizontal_extent_is_x_and_width() {
    let axis = Axis::Horizontal.geometry();
    let rect = Rect::new(5.0, 10.0, 50.0, 20.0);
    assert_eq!(axis.extent_start(&rect), 5.0);
    assert_eq!(axis.extent_end(&rect), 55.0);
    assert_eq!(axis.breadth(&rect), 20.0);
    assert_eq!(axis.breadth_start(&rect), 10.0);
}

#[test]
fn set_extent_start_leaves_cross_axis_untouched() {
    let mut rect = Rect::new(7.0, 3.0, 10.0, 10.0);
    VerticalAxis.set_extent_start(&mut rect, 42.0);
    assert_eq!(rect, Rect::new(7.0, 42.0, 10.0, 10.0));

    let mut rect = Rect::new(7.0, 3.0, 10.0, 10.0);
    HorizontalAxis.set_extent_start(&mut rect, 42.0);
    assert_eq!(rect, Rect::new(42.0, 3.0, 10.0, 10.0));
}

#[test]
fn advance_moves_start_to_end() {
    let axis = Axis::Vertical.geometry();
    let mut cursor = Rect::new(0.0, 10.0, 50.0, 15.0);
    axis.advance(&mut cursor);
    assert_eq!(cursor, Rect::new(0.0, 25.0, 50.0, 15.0));
    axis.translate_extent(&mut cursor, -5.0);
    assert_eq!(axis.extent_start(&cursor), 20.0);
}

#[test]
fn sizes_round_trip_through_logical_lengths() {
    for axis in [Axis::Vertical, Axis::Horizontal] {
        let geometry = axis.geometry();
        assert_eq!(geometry.axis(), axis);
        let size = geometry.make_size(100.0, 30.0);
        assert_eq!(geometry.extent_of_size(size), 100.0);
        assert_eq!(geometry.breadth_of_size(size), 30.0);
    }
    assert_eq!(
        Axis::Horizontal.geometry().extent_of_point(Point::new(8.0, 2.0)),
        8.0
    );
    assert_eq!(Axis::Vertical.geometry().make_size(1.0, 2.0), Size::new(2.0, 1.0));
}

#[test]
fn default_axis_is_vertical() {
    assert_eq!(Axis::default(), Axis::Vertical);
    assert_eq!(Axis::default().geometry().axis(), Axis::Vertical);
}
