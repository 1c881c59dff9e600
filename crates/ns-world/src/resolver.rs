//! Target selection helpers used by the nurse controller.

use ns_core::Position;

use crate::{Hospital, House};

/// The hospital closest to `position`.
///
/// Linear scan with a strict `<` comparison, so on equal distances the
/// hospital that comes first in `hospitals` wins.  Returns `None` only when
/// the slice is empty.
pub fn nearest_hospital(position: Position, hospitals: &[Hospital]) -> Option<&Hospital> {
    let mut best: Option<(&Hospital, f64)> = None;
    for hospital in hospitals {
        let d = position.distance(hospital.location);
        match best {
            Some((_, best_d)) if d >= best_d => {}
            _ => best = Some((hospital, d)),
        }
    }
    best.map(|(h, _)| h)
}

/// `true` if `house` has an illness and is not yet cured.
#[inline]
pub fn is_eligible_house(house: &House) -> bool {
    house.illness.is_some() && !house.is_cured()
}
