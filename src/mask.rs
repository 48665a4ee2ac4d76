//! Disabled-strip bookkeeping derived from matcher configuration.

use std::collections::BTreeSet;

use serde::Deserialize;
use serde_json::Value;

/// The 1-based strip indices switched off on each side of one detector.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StripMask {
    pub front: BTreeSet<u32>,
    pub back:  BTreeSet<u32>,
}

/// The `disable` field of a matcher file: a single strip index, or a list.
#[derive(Deserialize)]
#[serde(untagged)]
enum Disable {
    One(u32),
    Many(Vec<u32>),
}

impl From<Disable> for BTreeSet<u32> {
    fn from(disable: Disable) -> Self {
        match disable {
            Disable::One(n)   => BTreeSet::from([n]),
            Disable::Many(ns) => ns.into_iter().collect(),
        }
    }
}

impl StripMask {

    /// Extract the disabled strips of `detector` from a matcher tree.
    ///
    /// Missing keys anywhere along `DSD -> <detector> -> <side> -> disable`
    /// mean "nothing disabled" on that side, never an error; only a present
    /// but malformed `disable` value is reported.
    pub fn from_matcher(matcher: &Value, detector: &str) -> serde_json::Result<Self> {
        Ok(Self {
            front: disabled_side(matcher, detector, "front")?,
            back:  disabled_side(matcher, detector, "back" )?,
        })
    }

    /// Is pixel (front, back) switched off by either of its strips?
    pub fn masks(&self, front: u32, back: u32) -> bool {
        self.front.contains(&front) || self.back.contains(&back)
    }

}

fn disabled_side(matcher: &Value, detector: &str, side: &str) -> serde_json::Result<BTreeSet<u32>> {
    matcher.get("DSD")
        .and_then(|dsd| dsd.get(detector))
        .and_then(|det| det.get(side))
        .and_then(|side| side.get("disable"))
        .map(Disable::deserialize)
        .transpose()
        .map(|disable| disable.map(Into::into).unwrap_or_default())
}
