//! One-shot viewport reveals.
//!
//! DESIGN
//! ======
//! Section fades, skill bars, and lazy images are the same algorithm with
//! different settings and presentations: each element starts hidden, and the
//! first intersection sample at or above the threshold reveals it and stops
//! observing it. The transition is one-directional; later samples for a
//! revealed element are ignored, so scrolling away and back never re-hides or
//! re-triggers anything.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::config::ObserverConfig;
use crate::consts;
use crate::effect::{Effect, Target, WatchGroup};

const FADE_TRANSITION: &str = "opacity 0.6s ease, transform 0.6s ease";
const FADE_HIDDEN_OFFSET: &str = "translateY(30px)";

/// One intersection report for a watched element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionSample {
    pub intersecting: bool,
    /// Visible fraction of the element, 0.0 to 1.0.
    pub ratio: f64,
}

impl IntersectionSample {
    #[must_use]
    pub fn visible(ratio: f64) -> Self {
        Self { intersecting: true, ratio }
    }

    #[must_use]
    pub fn hidden() -> Self {
        Self { intersecting: false, ratio: 0.0 }
    }
}

/// How a watched element looks before and after it is revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Presentation {
    /// Fade up from transparent and offset.
    Fade,
    /// Grow from zero width to `progress` percent. Missing progress means 0.
    SkillBar { progress: Option<u8> },
    /// Swap in the deferred image source and drop the `lazy` class.
    LazyImage { src: Option<String> },
}

impl Presentation {
    /// Target width of a skill bar in percent.
    #[must_use]
    pub fn width_percent(&self) -> u8 {
        match self {
            Self::SkillBar { progress } => progress.unwrap_or(0),
            _ => 0,
        }
    }
}

/// Parse a `data-progress` attribute into a percentage.
///
/// Values are clamped to 0..=100 and rounded. Unparsable values are treated
/// as absent.
#[must_use]
pub fn parse_progress(raw: Option<&str>) -> Option<u8> {
    let Ok(value) = raw?.trim().trim_end_matches('%').parse::<f64>() else {
        return None;
    };
    if !value.is_finite() {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = value.clamp(0.0, 100.0).round() as u8;
    Some(percent)
}

#[derive(Debug, Clone)]
struct Watched {
    presentation: Presentation,
    revealed: bool,
}

#[derive(Debug, Clone)]
pub struct RevealObserver {
    group: WatchGroup,
    config: ObserverConfig,
    items: Vec<Watched>,
}

impl RevealObserver {
    /// Watch `count` section blocks that fade in.
    #[must_use]
    pub fn sections(count: usize, config: ObserverConfig) -> Self {
        Self::with_presentations(WatchGroup::Reveal, config, vec![Presentation::Fade; count])
    }

    /// Watch skill bars, one per raw `data-progress` attribute.
    #[must_use]
    pub fn skill_bars(progress: &[Option<String>], config: ObserverConfig) -> Self {
        let items = progress
            .iter()
            .map(|raw| Presentation::SkillBar { progress: parse_progress(raw.as_deref()) })
            .collect();
        Self::with_presentations(WatchGroup::SkillBar, config, items)
    }

    /// Watch images, one per `data-src` attribute.
    #[must_use]
    pub fn lazy_images(sources: Vec<Option<String>>, config: ObserverConfig) -> Self {
        let items = sources
            .into_iter()
            .map(|src| Presentation::LazyImage { src: src.filter(|s| !s.is_empty()) })
            .collect();
        Self::with_presentations(WatchGroup::LazyImage, config, items)
    }

    fn with_presentations(group: WatchGroup, config: ObserverConfig, presentations: Vec<Presentation>) -> Self {
        let items = presentations
            .into_iter()
            .map(|presentation| Watched { presentation, revealed: false })
            .collect();
        Self { group, config, items }
    }

    #[must_use]
    pub fn group(&self) -> WatchGroup {
        self.group
    }

    #[must_use]
    pub fn config(&self) -> ObserverConfig {
        self.config
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn presentation(&self, index: usize) -> Option<&Presentation> {
        self.items.get(index).map(|item| &item.presentation)
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.items.get(index).is_some_and(|item| item.revealed)
    }

    /// Number of elements still waiting to be revealed.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.items.iter().filter(|item| !item.revealed).count()
    }

    /// Put every element into its not-yet-visible presentation.
    #[must_use]
    pub fn initialize(&self) -> Vec<Effect> {
        let mut effects = Vec::new();
        for (index, item) in self.items.iter().enumerate() {
            let target = self.target(index);
            match item.presentation {
                Presentation::Fade => {
                    effects.push(Effect::style(target.clone(), "opacity", "0"));
                    effects.push(Effect::style(target.clone(), "transform", FADE_HIDDEN_OFFSET));
                    effects.push(Effect::style(target, "transition", FADE_TRANSITION));
                }
                Presentation::SkillBar { .. } => {
                    effects.push(Effect::style(target, "width", "0%"));
                }
                // Markup already ships lazy images with a placeholder.
                Presentation::LazyImage { .. } => {}
            }
        }
        effects
    }

    /// Handle one intersection report for the element at `index`.
    pub fn observe(&mut self, index: usize, sample: IntersectionSample) -> Vec<Effect> {
        let threshold = self.config.threshold;
        let group = self.group;
        let Some(item) = self.items.get_mut(index) else {
            log::debug!("{group:?} sample for unknown element {index}");
            return Vec::new();
        };
        if item.revealed || !sample.intersecting || sample.ratio + consts::RATIO_TOLERANCE < threshold {
            return Vec::new();
        }
        item.revealed = true;
        log::debug!("{group:?} element {index} revealed");

        let target = Target::Watched { group, index };
        let mut effects = match &item.presentation {
            Presentation::Fade => vec![
                Effect::style(target.clone(), "opacity", "1"),
                Effect::style(target, "transform", "translateY(0)"),
            ],
            Presentation::SkillBar { progress } => {
                vec![Effect::style(target, "width", format!("{}%", progress.unwrap_or(0)))]
            }
            Presentation::LazyImage { src } => {
                let mut effects = Vec::with_capacity(2);
                if let Some(src) = src {
                    effects.push(Effect::SetAttribute { target: target.clone(), name: "src", value: src.clone() });
                }
                effects.push(Effect::RemoveClass { target, class: "lazy" });
                effects
            }
        };
        effects.push(Effect::Unobserve { group, index });
        effects
    }

    fn target(&self, index: usize) -> Target {
        Target::Watched { group: self.group, index }
    }
}
