//! Quickstart: unit views, wrapping, and a Cartesian round trip.

use gonio::units::{Grad, Turn};
use gonio::{Angle, Polar2, Vec2};

fn main() {
    let a = Angle::from_degrees(-90.0);
    assert_eq!(a.wrap_unsigned().degrees(), 270.0);
    assert!((a.to::<Grad>() + 100.0).abs() < 1e-12);
    assert!((a.to::<Turn>() + 0.25).abs() < 1e-12);

    let p = Polar2::from(Vec2::new(0.0, 2.0));
    println!("{}", p);

    let v = Vec2::from(p);
    println!("{}", v);
}
