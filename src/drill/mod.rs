// src/drill/mod.rs

//! The ordered list of guards and strikes a session walks through.

pub mod cues;

use crate::common::timing;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

/// One guard or strike position in the training sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrillClass {
    /// Position in the script; also the `classification` of its packets.
    pub index: usize,
    pub label: String,
    /// SSML spoken before the class is sampled.
    pub cue: String,
    /// Strikes are eligible for countdown sub-phases.
    pub is_strike: bool,
    pub sample_count: usize,
}

/// Fixed, ordered sequence of drill classes. Never mutated once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DrillScript {
    classes: Vec<DrillClass>,
}

impl DrillScript {
    /// Builds a script from `(label, cue, is_strike, sample_count)` entries;
    /// indices follow entry order.
    pub fn from_entries<I, L, C>(entries: I) -> Self
    where
        I: IntoIterator<Item = (L, C, bool, usize)>,
        L: Into<String>,
        C: Into<String>,
    {
        let classes = entries
            .into_iter()
            .enumerate()
            .map(|(index, (label, cue, is_strike, sample_count))| DrillClass {
                index,
                label: label.into(),
                cue: cue.into(),
                is_strike,
                sample_count,
            })
            .collect();
        DrillScript { classes }
    }

    /// The stock Liechtenauer sequence: four guards, then three strikes.
    pub fn longsword() -> Self {
        const GUARDS: [&str; 4] = ["Vom tag", "Ochs", "Pflug", "Wechsel"];
        const STRIKES: [&str; 3] = ["Mittelhaw", "Oberhaw", "Zwerhaw"];

        let guards = GUARDS.iter().enumerate().map(|(i, name)| {
            let prefix = if i == 0 { "Guards: " } else { "" };
            (name.to_string(), cues::german(prefix, name), false, timing::SAMPLES_PER_CLASS)
        });
        let strikes = STRIKES.iter().enumerate().map(|(i, name)| {
            let prefix = if i == 0 { "Strikes: " } else { "" };
            (name.to_string(), cues::german(prefix, name), true, timing::SAMPLES_PER_CLASS)
        });
        Self::from_entries(guards.chain(strikes))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&DrillClass> {
        self.classes.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrillClass> {
        self.classes.iter()
    }

    /// Packets a fully successful session produces.
    pub fn total_samples(&self) -> usize {
        self.classes.iter().map(|c| c.sample_count).sum()
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_longsword_script_layout() {
        let script = DrillScript::longsword();
        assert_eq!(script.len(), 7);
        assert_eq!(script.total_samples(), 28);

        let labels: Vec<&str> = script.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(
            labels,
            ["Vom tag", "Ochs", "Pflug", "Wechsel", "Mittelhaw", "Oberhaw", "Zwerhaw"]
        );
        for (i, class) in script.iter().enumerate() {
            assert_eq!(class.index, i);
            assert_eq!(class.is_strike, i > 3);
            assert_eq!(class.sample_count, 4);
        }
    }

    #[test]
    fn test_longsword_cues() {
        let script = DrillScript::longsword();
        assert_eq!(
            script.get(0).unwrap().cue,
            "<speak>Guards: <lang xml:lang=\"de-DE\">Vom tag.</lang></speak>"
        );
        assert_eq!(
            script.get(4).unwrap().cue,
            "<speak>Strikes: <lang xml:lang=\"de-DE\">Mittelhaw.</lang></speak>"
        );
        assert_eq!(
            script.get(6).unwrap().cue,
            "<speak><lang xml:lang=\"de-DE\">Zwerhaw.</lang></speak>"
        );
        assert!(script.get(7).is_none());
    }

    #[test]
    fn test_from_entries_assigns_indices() {
        let script = DrillScript::from_entries([
            ("a", "<speak>a</speak>", false, 2),
            ("b", "<speak>b</speak>", true, 0),
        ]);
        assert_eq!(script.get(1).unwrap().index, 1);
        assert!(script.get(1).unwrap().is_strike);
        assert_eq!(script.total_samples(), 2);
    }

    #[test]
    fn test_empty_script() {
        let script = DrillScript::default();
        assert!(script.is_empty());
        assert_eq!(script.total_samples(), 0);
    }
}
