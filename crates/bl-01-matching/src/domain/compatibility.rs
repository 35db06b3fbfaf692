//! Blood group compatibility table.
//!
//! Donor-centric: each row lists the receiver groups one donor group can
//! supply. Kept as an explicit table rather than derived from ABO/Rh rules,
//! so the medical policy is readable in one place and cannot drift.

use shared_types::BloodGroup;

use BloodGroup::*;

/// Receiver groups a donor of the given group can supply.
pub fn recipients_for(donor: BloodGroup) -> &'static [BloodGroup] {
    match donor {
        // Universal donor.
        ONeg => &[ONeg, OPos, ANeg, APos, BNeg, BPos, AbNeg, AbPos],
        OPos => &[OPos, APos, BPos, AbPos],
        ANeg => &[ANeg, APos, AbNeg, AbPos],
        APos => &[APos, AbPos],
        BNeg => &[BNeg, BPos, AbNeg, AbPos],
        BPos => &[BPos, AbPos],
        AbNeg => &[AbNeg, AbPos],
        // Can only supply AB+.
        AbPos => &[AbPos],
    }
}

/// Returns true if `donor` blood can be given to a `receiver` of the
/// given group.
pub fn can_donate_to(donor: BloodGroup, receiver: BloodGroup) -> bool {
    recipients_for(donor).contains(&receiver)
}
