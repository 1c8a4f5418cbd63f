//! Rules naming the observance of a day, in order of precedence.
//!
//! [`RULES`] is evaluated top to bottom and the first match wins, so a
//! principal feast displaces anything else on its date, and a Sunday
//! displaces a red-letter day falling on it.

use super::fmt::*;
use super::{LiturgicalDay, Rank, Season};

/// Which group of observances a rule recognizes.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RuleKind {
    PrincipalFeast,
    AshWednesday,
    HolyWeek,
    EasterWeek,
    Sunday,
    RedLetterDay,
}

/// A rule recognizing one group of observances, with the rank they carry.
#[derive(Debug)]
pub struct Rule {
    pub kind: RuleKind,
    pub rank: Rank,
    matcher: fn(&LiturgicalDay) -> Option<&'static str>,
}

impl Rule {
    /// Name of the observance this rule finds on `day`, if any.
    pub fn apply(&self, day: &LiturgicalDay) -> Option<&'static str> {
        (self.matcher)(day)
    }
}

pub static RULES: [Rule; 6] = [
    Rule {
        kind: RuleKind::PrincipalFeast,
        rank: Rank::Principal,
        matcher: principal_feast,
    },
    Rule {
        kind: RuleKind::AshWednesday,
        rank: Rank::Fixed,
        matcher: ash_wednesday,
    },
    Rule {
        kind: RuleKind::HolyWeek,
        rank: Rank::Fixed,
        matcher: holy_week,
    },
    Rule {
        kind: RuleKind::EasterWeek,
        rank: Rank::Fixed,
        matcher: easter_week,
    },
    Rule {
        kind: RuleKind::Sunday,
        rank: Rank::Sunday,
        matcher: sunday,
    },
    Rule {
        kind: RuleKind::RedLetterDay,
        rank: Rank::Major,
        matcher: red_letter,
    },
];

/// Picks `names[offset / 7]` if `offset` is a whole number of weeks within
/// the table.
fn weekly(names: &[&'static str], offset: i32) -> Option<&'static str> {
    if offset < 0 || offset % 7 != 0 {
        return None;
    }
    names.get((offset / 7) as usize).copied()
}

fn principal_feast(day: &LiturgicalDay) -> Option<&'static str> {
    match day.date - day.anchors.easter_day {
        0 => return Some(EASTER_DAY),
        39 => return Some(ASCENSION_DAY),
        49 => return Some(DAY_OF_PENTECOST),
        56 => return Some(TRINITY_SUNDAY),
        _ => {}
    }
    match day.month_day() {
        (12, 25) => Some(CHRISTMAS_DAY),
        (1, 6) => Some(THE_EPIPHANY),
        (11, 1) => Some(ALL_SAINTS_DAY),
        _ => None,
    }
}

fn ash_wednesday(day: &LiturgicalDay) -> Option<&'static str> {
    (day.date == day.anchors.ash_wednesday).then_some(ASH_WEDNESDAY)
}

fn holy_week(day: &LiturgicalDay) -> Option<&'static str> {
    match day.anchors.easter_day - day.date {
        back @ 1..=7 => Some(HOLY_WEEK[(7 - back) as usize]),
        _ => None,
    }
}

fn easter_week(day: &LiturgicalDay) -> Option<&'static str> {
    match day.date - day.anchors.easter_day {
        fwd @ 1..=6 => Some(EASTER_WEEK[(fwd - 1) as usize]),
        _ => None,
    }
}

fn sunday(day: &LiturgicalDay) -> Option<&'static str> {
    if !day.date.is_sunday() {
        return None;
    }
    let a = &day.anchors;
    match day.season {
        Season::Advent => weekly(&ADVENT_SUNDAYS, day.date - a.advent_sunday),
        Season::Christmas => {
            // the Christmas Day that opened this season
            let christmas_day = if day.date >= a.christmas_day {
                a.christmas_day
            } else {
                a.epiphany - 12
            };
            let after = day.date - christmas_day;
            Some(CHRISTMAS_SUNDAYS[if (1..=7).contains(&after) { 0 } else { 1 }])
        }
        Season::Epiphany => {
            // 4 to 9 Sundays depending on Easter, so the last two count back
            if day.date == a.easter_day - 56 {
                return Some(SECOND_TO_LAST_EPIPHANY);
            }
            if day.date == a.easter_day - 49 {
                return Some(LAST_EPIPHANY);
            }
            let first = (a.epiphany + 1).sunday_on_or_after();
            weekly(&EPIPHANY_SUNDAYS, day.date - first)
        }
        Season::Lent => weekly(&LENT_SUNDAYS, 42 - (a.easter_day - day.date)),
        Season::Easter => weekly(&EASTER_SUNDAYS, day.date - a.easter_day - 7),
        // numbered back from Advent, the count depends on Easter
        Season::Pentecost => weekly(&PROPERS, 203 - (a.advent_sunday - day.date)),
    }
}

fn red_letter(day: &LiturgicalDay) -> Option<&'static str> {
    let (m, d) = day.month_day();
    red_letter_day(m, d)
}
