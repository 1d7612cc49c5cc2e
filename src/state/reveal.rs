//! Hidden/visible animation presets and the per-section reveal state machine.
//!
//! Presets are a fixed table: every animated element picks one of the
//! [`Variants`] constants and renders the inline style for the current
//! [`Phase`]. The actual interpolation is left to CSS transitions.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Hidden,
    Visible,
}

impl From<bool> for Phase {
    fn from(visible: bool) -> Self {
        if visible {
            Self::Visible
        } else {
            Self::Hidden
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub opacity: f64,
    /// Vertical offset in px, positive is down.
    pub offset_y: f64,
    pub scale: f64,
}

impl Frame {
    pub const REST: Frame = Frame {
        opacity: 1.0,
        offset_y: 0.0,
        scale: 1.0,
    };

    const fn faded(offset_y: f64, scale: f64) -> Self {
        Self {
            opacity: 0.0,
            offset_y,
            scale,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    Default,
    EaseOut,
}

impl Easing {
    fn css(self) -> &'static str {
        match self {
            Self::Default => "ease",
            Self::EaseOut => "ease-out",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Variants {
    pub hidden: Frame,
    pub visible: Frame,
    /// Seconds.
    pub duration: f64,
    pub ease: Easing,
}

impl Variants {
    /// Cards, list entries and form rows inside a section.
    pub const ITEM: Variants = Variants::slide_up(20.0, 0.5);
    /// Hero heading, tagline and call to action.
    pub const HERO_ITEM: Variants = Variants::slide_up(20.0, 0.6);
    /// Section titles and descriptions.
    pub const HEADING: Variants = Variants::slide_up(20.0, 0.6);
    pub const PORTRAIT: Variants = Variants {
        hidden: Frame::faded(0.0, 0.8),
        visible: Frame::REST,
        duration: 0.8,
        ease: Easing::EaseOut,
    };
    pub const FADE: Variants = Variants {
        hidden: Frame::faded(0.0, 1.0),
        visible: Frame::REST,
        duration: 0.5,
        ease: Easing::Default,
    };
    /// Opacity-only fade of a staggering container itself.
    pub const CONTAINER: Variants = Variants {
        hidden: Frame::faded(0.0, 1.0),
        visible: Frame::REST,
        duration: 0.3,
        ease: Easing::Default,
    };
    pub const MODAL_OVERLAY: Variants = Variants {
        hidden: Frame::faded(0.0, 1.0),
        visible: Frame::REST,
        duration: 0.3,
        ease: Easing::Default,
    };
    pub const MODAL_CONTENT: Variants = Variants::slide_up(50.0, 0.3);

    const fn slide_up(offset_y: f64, duration: f64) -> Self {
        Self {
            hidden: Frame::faded(offset_y, 1.0),
            visible: Frame::REST,
            duration,
            ease: Easing::Default,
        }
    }

    pub fn frame(&self, phase: Phase) -> Frame {
        match phase {
            Phase::Hidden => self.hidden,
            Phase::Visible => self.visible,
        }
    }

    /// Delays only hold back the way in; hiding is immediate.
    pub fn animation(&self, from: Phase, to: Phase, delay: f64) -> Animation {
        Animation {
            from: self.frame(from),
            to: self.frame(to),
            duration: self.duration,
            delay: if to == Phase::Visible { delay } else { 0.0 },
            ease: self.ease,
        }
    }

    /// Inline CSS for an element resting in (or heading towards) `phase`.
    pub fn style(&self, phase: Phase, delay: f64) -> String {
        self.animation(phase, phase, delay).css()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Animation {
    pub from: Frame,
    pub to: Frame,
    pub duration: f64,
    pub delay: f64,
    pub ease: Easing,
}

impl Animation {
    pub fn css(&self) -> String {
        let Frame {
            opacity,
            offset_y,
            scale,
        } = self.to;
        let timing = format!("{}s {} {}s", self.duration, self.ease.css(), self.delay);
        format!(
            "opacity: {opacity}; transform: translateY({offset_y}px) scale({scale}); \
             transition: opacity {timing}, transform {timing};"
        )
    }
}

/// Inter-child timing for a container that reveals its children in order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stagger {
    pub delay_children: f64,
    pub stagger_children: f64,
}

impl Stagger {
    pub const SECTION: Stagger = Stagger {
        delay_children: 0.0,
        stagger_children: 0.2,
    };
    pub const HERO: Stagger = Stagger {
        delay_children: 0.0,
        stagger_children: 0.3,
    };

    pub fn delay_for(&self, index: usize) -> f64 {
        let delay = self.delay_children + self.stagger_children * index as f64;
        // keep the css free of float noise like 0.6000000000000001s
        (delay * 1000.0).round() / 1000.0
    }
}

/// One phase change of a container, handed to every child so they can pick
/// their own staggered animation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reveal {
    pub from: Phase,
    pub to: Phase,
    stagger: Stagger,
}

impl Reveal {
    /// The resting state before anything has been observed.
    pub fn initial(stagger: Stagger) -> Self {
        Self {
            from: Phase::Hidden,
            to: Phase::Hidden,
            stagger,
        }
    }

    pub fn child_animation(&self, variants: &Variants, index: usize) -> Animation {
        variants.animation(self.from, self.to, self.stagger.delay_for(index))
    }

    /// Style for the `index`th staggered child.
    pub fn style(&self, variants: &Variants, index: usize) -> String {
        self.child_animation(variants, index).css()
    }

    /// Style for the container whose children this reveal staggers.
    pub fn container_style(&self) -> String {
        self.style_after(&Variants::CONTAINER, 0.0)
    }

    /// Style for an element outside the stagger with its own fixed delay.
    pub fn style_after(&self, variants: &Variants, delay: f64) -> String {
        variants.animation(self.from, self.to, delay).css()
    }
}

/// Tracks the phase of one section and emits a [`Reveal`] per real change.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealController {
    stagger: Stagger,
    phase: Phase,
    replays: u32,
}

impl RevealController {
    pub fn new(stagger: Stagger) -> Self {
        Self {
            stagger,
            phase: Phase::Hidden,
            replays: 0,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Number of times the section has been revealed so far.
    pub fn replays(&self) -> u32 {
        self.replays
    }

    pub fn current(&self) -> Reveal {
        Reveal {
            from: self.phase,
            to: self.phase,
            stagger: self.stagger,
        }
    }

    pub fn set_visible(&mut self, visible: bool) -> Option<Reveal> {
        let to = Phase::from(visible);
        if to == self.phase {
            return None;
        }
        let from = std::mem::replace(&mut self.phase, to);
        if to == Phase::Visible {
            self.replays += 1;
        }
        Some(Reveal {
            from,
            to,
            stagger: self.stagger,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_table() {
        assert_eq!(Variants::ITEM.frame(Phase::Hidden).opacity, 0.0);
        assert_eq!(Variants::ITEM.frame(Phase::Hidden).offset_y, 20.0);
        assert_eq!(Variants::ITEM.frame(Phase::Visible), Frame::REST);
        assert_eq!(Variants::ITEM.duration, 0.5);

        assert_eq!(Variants::HERO_ITEM.duration, 0.6);
        assert_eq!(Variants::PORTRAIT.hidden.scale, 0.8);
        assert_eq!(Variants::PORTRAIT.ease, Easing::EaseOut);
        assert_eq!(Variants::MODAL_CONTENT.hidden.offset_y, 50.0);
    }

    #[test]
    fn test_replay_always_starts_hidden() {
        let mut controller = RevealController::new(Stagger::SECTION);
        let toggles = [true, false, true, true, false, false, true, false, true];

        for visible in toggles {
            if let Some(reveal) = controller.set_visible(visible) {
                if reveal.to == Phase::Visible {
                    for i in 0..3 {
                        let anim = reveal.child_animation(&Variants::ITEM, i);
                        assert_eq!(anim.from, Variants::ITEM.hidden);
                        assert_eq!(anim.to, Variants::ITEM.visible);
                    }
                } else {
                    let anim = reveal.child_animation(&Variants::ITEM, 0);
                    assert_eq!(anim.to, Variants::ITEM.hidden);
                }
            }
        }
        assert_eq!(controller.replays(), 4);
    }

    #[test]
    fn test_replays_are_identical() {
        let mut controller = RevealController::new(Stagger::HERO);
        let first = controller.set_visible(true).expect("should reveal");
        controller.set_visible(false);
        let second = controller.set_visible(true).expect("should reveal again");

        assert_eq!(first, second);
        assert_eq!(
            first.style(&Variants::HERO_ITEM, 2),
            second.style(&Variants::HERO_ITEM, 2)
        );
    }

    #[test]
    fn test_same_phase_is_not_a_transition() {
        let mut controller = RevealController::new(Stagger::SECTION);
        assert!(controller.set_visible(false).is_none());
        assert!(controller.set_visible(true).is_some());
        assert!(controller.set_visible(true).is_none());
        assert_eq!(controller.phase(), Phase::Visible);
        assert_eq!(controller.replays(), 1);
    }

    #[test]
    fn test_stagger_delays() {
        let delays = (0..4)
            .map(|i| Stagger::SECTION.delay_for(i))
            .collect::<Vec<_>>();
        assert_eq!(delays, vec![0.0, 0.2, 0.4, 0.6]);
        assert!(delays.windows(2).all(|w| w[0] < w[1]));

        assert_eq!(Stagger::HERO.delay_for(2), 0.6);
    }

    #[test]
    fn test_hiding_ignores_delay() {
        let mut controller = RevealController::new(Stagger::SECTION);
        controller.set_visible(true);
        let hide = controller.set_visible(false).expect("should hide");
        assert_eq!(hide.child_animation(&Variants::ITEM, 3).delay, 0.0);
        assert_eq!(
            hide.style_after(&Variants::HEADING, 0.2),
            Variants::HEADING.style(Phase::Hidden, 0.0)
        );
    }

    #[test]
    fn test_css() {
        assert_eq!(
            Variants::ITEM.style(Phase::Hidden, 0.0),
            "opacity: 0; transform: translateY(20px) scale(1); \
             transition: opacity 0.5s ease 0s, transform 0.5s ease 0s;"
        );
        assert_eq!(
            Variants::PORTRAIT.style(Phase::Visible, 0.0),
            "opacity: 1; transform: translateY(0px) scale(1); \
             transition: opacity 0.8s ease-out 0s, transform 0.8s ease-out 0s;"
        );

        let reveal = RevealController::new(Stagger::SECTION)
            .set_visible(true)
            .expect("should reveal");
        assert!(reveal
            .style(&Variants::ITEM, 1)
            .ends_with("transition: opacity 0.5s ease 0.2s, transform 0.5s ease 0.2s;"));
    }

    #[test]
    fn test_container_fades_with_children() {
        let mut controller = RevealController::new(Stagger::SECTION);
        assert!(controller.current().container_style().starts_with("opacity: 0;"));

        let shown = controller.set_visible(true).expect("should reveal");
        assert_eq!(
            shown.container_style(),
            "opacity: 1; transform: translateY(0px) scale(1); \
             transition: opacity 0.3s ease 0s, transform 0.3s ease 0s;"
        );

        let hidden = controller.set_visible(false).expect("should hide");
        assert_eq!(
            hidden.container_style(),
            Variants::CONTAINER.style(Phase::Hidden, 0.0)
        );
    }

    #[test]
    fn test_initial_is_hidden() {
        let reveal = Reveal::initial(Stagger::SECTION);
        assert_eq!(reveal, RevealController::new(Stagger::SECTION).current());
        assert_eq!(
            reveal.style(&Variants::ITEM, 2),
            Variants::ITEM.style(Phase::Hidden, 0.0)
        );
    }
}
