//! Serde example: angles serialize as their raw degree value, coordinates field-wise.
//!
//! Run with `cargo run --example serialization --features serde`.

use gonio::{Angle, Polar2};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
struct Waypoint {
    name: String,
    heading: Angle,
    offset: Polar2,
}

fn main() {
    let wp = Waypoint {
        name: "alpha".into(),
        heading: Angle::from_degrees(270.0),
        offset: Polar2::new(2.5, Angle::RIGHT),
    };

    let json = serde_json::to_string_pretty(&wp).unwrap();
    println!("{json}");

    let back: Waypoint = serde_json::from_str(&json).unwrap();
    assert_eq!(back.heading, wp.heading);
    assert_eq!(back.offset, wp.offset);
}
