pub const HEADER_OFFSET_PX: f64 = 100.0;
pub const REVEAL_THRESHOLD: f64 = 0.3;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum SectionId {
    Hero,
    About,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [Self::Hero, Self::About, Self::Projects, Self::Contact];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Projects => "Projects",
            Self::Contact => "Contact",
        }
    }
}

/// Returns the id of the last section (in document order) whose top sits at
/// or above `scroll_y` plus the fixed-header compensation, falling back to
/// the first registered section. Sections without a mounted element are
/// expected to be absent from `section_tops`.
pub fn active_section(scroll_y: f64, section_tops: &[(SectionId, f64)]) -> SectionId {
    let threshold = scroll_y + HEADER_OFFSET_PX;

    for (id, top) in section_tops.iter().rev() {
        if *top <= threshold {
            return *id;
        }
    }

    section_tops
        .first()
        .map(|(id, _)| *id)
        .unwrap_or(SectionId::Hero)
}

/// One-way visibility state for entrance animations. The only transition is
/// `NotSeen -> Seen`; scrolling a section back out of view never reverts it.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Reveal {
    #[default]
    NotSeen,
    Seen,
}

impl Reveal {
    pub fn mark_seen(&mut self) {
        *self = Self::Seen;
    }

    pub fn is_seen(self) -> bool {
        matches!(self, Self::Seen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_tops() -> Vec<(SectionId, f64)> {
        vec![
            (SectionId::Hero, 0.0),
            (SectionId::About, 800.0),
            (SectionId::Projects, 1600.0),
            (SectionId::Contact, 2400.0),
        ]
    }

    #[test]
    fn scroll_positions_map_to_expected_sections() {
        let tops = page_tops();

        assert_eq!(active_section(0.0, &tops), SectionId::Hero);
        assert_eq!(active_section(650.0, &tops), SectionId::Hero);
        assert_eq!(active_section(750.0, &tops), SectionId::About);
        assert_eq!(active_section(850.0, &tops), SectionId::About);
        assert_eq!(active_section(1650.0, &tops), SectionId::Projects);
        assert_eq!(active_section(2401.0, &tops), SectionId::Contact);
    }

    #[test]
    fn section_boundary_includes_header_compensation() {
        let tops = page_tops();

        assert_eq!(active_section(699.0, &tops), SectionId::Hero);
        assert_eq!(active_section(700.0, &tops), SectionId::About);
    }

    #[test]
    fn increasing_scroll_never_moves_the_active_section_backward() {
        let tops = page_tops();
        let rank = |id: SectionId| {
            SectionId::ALL
                .iter()
                .position(|candidate| *candidate == id)
                .unwrap_or(0)
        };

        let mut previous = rank(active_section(0.0, &tops));
        let mut y = 0.0;
        while y <= 3000.0 {
            let current = rank(active_section(y, &tops));
            assert!(current >= previous, "active section moved backward at y={y}");
            previous = current;
            y += 7.0;
        }
    }

    #[test]
    fn no_registered_sections_falls_back_to_hero() {
        assert_eq!(active_section(500.0, &[]), SectionId::Hero);
    }

    #[test]
    fn unmounted_sections_are_simply_absent() {
        let tops = vec![(SectionId::About, 800.0), (SectionId::Contact, 2400.0)];

        assert_eq!(active_section(0.0, &tops), SectionId::About);
        assert_eq!(active_section(900.0, &tops), SectionId::About);
        assert_eq!(active_section(2500.0, &tops), SectionId::Contact);
    }

    #[test]
    fn reveal_is_monotonic() {
        let mut reveal = Reveal::default();
        assert!(!reveal.is_seen());

        reveal.mark_seen();
        assert!(reveal.is_seen());

        reveal.mark_seen();
        assert!(reveal.is_seen());
    }

    #[test]
    fn section_ids_are_stable_strings() {
        let ids: Vec<&str> = SectionId::ALL.iter().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["hero", "about", "projects", "contact"]);
    }
}
