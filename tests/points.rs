use day8::{Error, Point};

#[test]
fn point_parses_signed_coordinates() {
    let point = Point::try_from("-3, 4,+5").unwrap();
    assert_eq!(point, Point::new(-3, 4, 5));
    assert_eq!(point.to_string(), "(-3, 4, 5)");
}

#[test]
fn point_rejects_wrong_field_count() {
    assert_eq!(
        Point::try_from("1,2"),
        Err(Error::InvalidPointText("1,2".to_string()))
    );
    assert_eq!(
        Point::try_from("1,2,3,4"),
        Err(Error::InvalidPointText("1,2,3,4".to_string()))
    );
}

#[test]
fn point_rejects_non_integer_coordinate() {
    assert_eq!(
        Point::try_from("1,two,3"),
        Err(Error::InvalidCoordinateText("two".to_string()))
    );
}

#[test]
fn sq_dist_is_symmetric_and_exact() {
    let a = Point::new(162, 817, 812);
    let b = Point::new(425, 690, 689);
    assert_eq!(a.sq_dist(&b), Some(100427));
    assert_eq!(b.sq_dist(&a), Some(100427));
    assert_eq!(a.sq_dist(&a), Some(0));
}

#[test]
fn sq_dist_of_far_apart_coordinates() {
    let a = Point::try_from("0,0,0").unwrap();
    let b = Point::try_from("5000000000,0,0").unwrap();
    assert_eq!(a.sq_dist(&b), Some(25_000_000_000_000_000_000));

    let min = Point::new(i64::MIN, 0, 0);
    let max = Point::new(i64::MAX, 0, 0);
    assert_eq!(min.sq_dist(&max), Some(u128::from(u64::MAX).pow(2)));
}

#[test]
fn sq_dist_beyond_u128_is_none() {
    let min = Point::new(i64::MIN, i64::MIN, i64::MIN);
    let max = Point::new(i64::MAX, i64::MAX, i64::MAX);
    assert_eq!(min.sq_dist(&max), None);
}

#[test]
fn read_points_skips_header() {
    let points = day8::read_points("inputs.txt").unwrap();
    assert_eq!(points.len(), 20);
    assert_eq!(points[0], Point::new(162, 817, 812));
    assert_eq!(points[19], Point::new(425, 690, 689));
}

#[test]
fn read_points_without_header() {
    let points = day8::read_points("tests/inputs/triangle.txt").unwrap();
    assert_eq!(
        points,
        vec![
            Point::new(0, 0, 0),
            Point::new(10, 0, 0),
            Point::new(0, 10, 0)
        ]
    );
}

#[test]
fn read_points_fails_on_malformed_line() {
    let err = day8::read_points("tests/inputs/malformed.txt").unwrap_err();
    assert!(format!("{:#}", err).contains("line 3"));
    assert_eq!(
        err.downcast_ref::<Error>(),
        Some(&Error::InvalidPointText("4,5".to_string()))
    );
}

#[test]
fn read_points_fails_on_malformed_first_line() {
    let err = day8::read_points("tests/inputs/malformed_first.txt").unwrap_err();
    assert!(format!("{:#}", err).contains("line 1"));
    assert_eq!(
        err.downcast_ref::<Error>(),
        Some(&Error::InvalidCoordinateText("".to_string()))
    );
}

#[test]
fn read_points_fails_on_missing_file() {
    assert!(day8::read_points("tests/inputs/not_exist.txt").is_err());
}
