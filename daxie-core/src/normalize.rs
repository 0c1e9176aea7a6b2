//! Zero elision for expanded uppercase amounts
//!
//! The formatter first writes one digit and one unit per position
//! (`壹万零仟零佰零拾零元零角零分零厘`). The passes below collapse that into the
//! written form (`壹万元`). Pass order matters: each pass expects the shapes
//! left behind by the one before it.

/// Zero in front of 仟/佰/拾 keeps the zero and drops the unit
const MINOR_UNIT_ZEROS: [&str; 3] = ["零仟", "零佰", "零拾"];

/// Zero in front of a group boundary drops the zero and keeps the boundary
const GROUP_ZEROS: [(&str, &str); 3] = [("零亿", "亿"), ("零万", "万"), ("零元", "元")];

/// Fractional zeros are never written
const FRACTION_ZEROS: [&str; 3] = ["零角", "零分", "零厘"];

/// Collapse redundant zeros and units in an expanded amount
pub fn normalize(text: &str) -> String {
    let mut text = text.to_string();

    for pattern in MINOR_UNIT_ZEROS {
        replace_until_stable(&mut text, pattern, "零");
    }

    for (zero_group, group) in GROUP_ZEROS {
        replace_until_stable(&mut text, "零零零", "零");
        replace_until_stable(&mut text, "零零", "零");
        replace_until_stable(&mut text, zero_group, group);
    }

    for pattern in FRACTION_ZEROS {
        replace_until_stable(&mut text, pattern, "");
    }

    // an all-zero 万 group right after 亿
    replace_until_stable(&mut text, "亿万", "亿");

    text
}

/// Replace `from` globally, again and again, until it no longer occurs.
/// Every replacement is shorter than its pattern, so this terminates.
fn replace_until_stable(text: &mut String, from: &str, to: &str) {
    while text.contains(from) {
        *text = text.replace(from, to);
    }
}
