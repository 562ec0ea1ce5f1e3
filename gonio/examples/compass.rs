//! A minimal compass readout: turn a pointer direction into an angle, print it in all twelve
//! units at two decimal places, and derive the rotation a renderer would apply.

use gonio::units::*;
use gonio::{Angle, Euler, Vec2};

fn main() {
    // A normalized pointer/look direction, as input handling would provide once per frame.
    let pointer = Vec2::new(0.6, 0.8);
    let heading = Angle::from(pointer).wrap_unsigned();

    println!("{:>12}: {:.2}", "degrees", heading.display_in::<Degree>());
    println!("{:>12}: {:.2}", "radians", heading.display_in::<Radian>());
    println!("{:>12}: {:.2}", "arcminutes", heading.display_in::<Arcminute>());
    println!("{:>12}: {:.2}", "arcseconds", heading.display_in::<Arcsecond>());
    println!("{:>12}: {:.2}", "grads", heading.display_in::<Grad>());
    println!("{:>12}: {:.2}", "turns", heading.display_in::<Turn>());
    println!("{:>12}: {:.2}", "hour angles", heading.display_in::<HourAngle>());
    println!("{:>12}: {:.2}", "winds", heading.display_in::<Wind>());
    println!("{:>12}: {:.2}", "milliradians", heading.display_in::<Milliradian>());
    println!("{:>12}: {:.2}", "brads", heading.display_in::<BinaryDegree>());
    println!("{:>12}: {:.2}", "quadrants", heading.display_in::<Quadrant>());
    println!("{:>12}: {:.2}", "sextants", heading.display_in::<Sextant>());

    // The rotation a y-up renderer would apply to point an object along the heading.
    let rotation = Euler::from(heading);
    println!("{:>12}: {}", "rotation", rotation);
}
