//! Core data model for the kindness chain campaign page.
//! One state struct drives the whole page; every mutation goes through
//! the reducer so the render side stays a pure function of state.

use crate::state::Tween;
use std::rc::Rc;
use yew::Reducible;

// ---------------- Groups -----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Trend {
    Up,
    Down,
    Stable,
}

impl Trend {
    pub const ALL: [Trend; 3] = [Trend::Up, Trend::Down, Trend::Stable];

    pub fn glyph(self) -> &'static str {
        match self {
            Trend::Up => "📈",
            Trend::Down => "📉",
            Trend::Stable => "➡️",
        }
    }
}

/// Registration status. The current campaign only ever shows active
/// groups; nothing mutates this after seeding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GroupStatus {
    Active,
}

impl GroupStatus {
    pub fn label(self) -> &'static str {
        match self {
            GroupStatus::Active => "Active",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    /// Stable id; rows and mutations address groups by id, never by position.
    pub id: u32,
    pub name: String,
    pub members: u32,
    pub chain_length: u32,
    pub status: GroupStatus,
    pub trend: Trend,
}

fn seed_groups() -> Vec<Group> {
    let seeds: [(&str, u32, u32, Trend); 8] = [
        ("Tech Innovators", 45, 156, Trend::Up),
        ("Community Heroes", 38, 142, Trend::Up),
        ("Green Warriors", 52, 128, Trend::Down),
        ("Education First", 41, 115, Trend::Up),
        ("Health Champions", 33, 98, Trend::Stable),
        ("Art Collective", 29, 87, Trend::Up),
        ("Youth United", 36, 76, Trend::Down),
        ("Senior Support", 27, 65, Trend::Up),
    ];
    seeds
        .into_iter()
        .enumerate()
        .map(|(i, (name, members, chain_length, trend))| Group {
            id: i as u32 + 1,
            name: name.to_string(),
            members,
            chain_length,
            status: GroupStatus::Active,
            trend,
        })
        .collect()
}

/// Leaderboard order: descending chain length; stable, so groups with
/// equal chains keep their registry order.
pub fn ranked_groups(groups: &[Group]) -> Vec<Group> {
    let mut ranked = groups.to_vec();
    ranked.sort_by(|a, b| b.chain_length.cmp(&a.chain_length));
    ranked
}

// ---------------- Achievements -----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AchievementDef {
    pub title: &'static str,
    pub blurb: &'static str,
    pub icon: &'static str,
    pub threshold: u32,
}

pub const ACHIEVEMENTS: [AchievementDef; 3] = [
    AchievementDef {
        title: "First Link",
        blurb: "Record your first help",
        icon: "🔗",
        threshold: 1,
    },
    AchievementDef {
        title: "Chain Builder",
        blurb: "Help five times",
        icon: "⛓️",
        threshold: 5,
    },
    AchievementDef {
        title: "Kindness Champion",
        blurb: "Reach ten acts of kindness",
        icon: "🏆",
        threshold: 10,
    },
];

// ---------------- Campaign totals -----------------

/// A running total plus the tween easing its on-screen value.
#[derive(Clone, Debug, PartialEq)]
pub struct StatCounter {
    value: u32,
    tween: Option<Tween>,
}

impl StatCounter {
    pub fn new(value: u32) -> Self {
        Self { value, tween: None }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// What the page shows right now (mid-tween values included).
    pub fn shown(&self) -> u32 {
        match &self.tween {
            Some(tween) => tween.value(),
            None => self.value,
        }
    }

    pub fn animate_to(&mut self, target: u32, duration_ms: f64) {
        self.tween = Some(Tween::new(self.shown(), target, duration_ms));
        self.value = target;
    }

    /// Advances the tween; true while one is active. Progress is state
    /// that must persist even on samples where the shown value holds.
    fn tick(&mut self, dt_ms: f64) -> bool {
        let Some(tween) = self.tween.as_mut() else {
            return false;
        };
        tween.advance(dt_ms);
        if tween.done() {
            self.tween = None;
        }
        true
    }
}

// ---------------- App state -----------------

pub const TOTAL_CHAINS_SEED: u32 = 247;
pub const TOTAL_HELPERS_SEED: u32 = 1842;
pub const COUNTDOWN_SEED_MS: u64 = 2 * 24 * 60 * 60 * 1000 + 14 * 60 * 60 * 1000;
pub const COUNTDOWN_STEP_MS: u64 = 1000;
pub const STAT_TWEEN_MS: f64 = 500.0;
pub const LONGEST_TWEEN_MS: f64 = 1000.0;

/// Payload for the thank-you modal after a recorded help.
#[derive(Clone, Debug, PartialEq)]
pub struct Confirmation {
    pub helper: String,
    pub group: String,
}

impl Confirmation {
    pub fn message(&self) -> String {
        format!(
            "Thank you {}! You've successfully added to {}'s chain. Keep the kindness flowing!",
            self.helper, self.group
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct AppState {
    pub groups: Vec<Group>,
    /// Helps recorded this session; drives achievement unlocks.
    pub help_count: u32,
    /// Unlock state per ACHIEVEMENTS slot; never re-locks.
    pub unlocked: [bool; 3],
    pub total_chains: StatCounter,
    pub total_helpers: StatCounter,
    pub longest_chain: StatCounter,
    /// Tournament time remaining; clamped at zero once it expires.
    pub countdown_ms: u64,
    /// Group pulsing after a submit; id, not index.
    pub highlighted: Option<u32>,
    pub confirmation: Option<Confirmation>,
}

impl AppState {
    pub fn seeded() -> Self {
        let groups = seed_groups();
        let longest = groups.iter().map(|g| g.chain_length).max().unwrap_or(0);
        Self {
            groups,
            help_count: 0,
            unlocked: [false; 3],
            total_chains: StatCounter::new(TOTAL_CHAINS_SEED),
            total_helpers: StatCounter::new(TOTAL_HELPERS_SEED),
            longest_chain: StatCounter::new(longest),
            countdown_ms: COUNTDOWN_SEED_MS,
            highlighted: None,
            confirmation: None,
        }
    }

    fn refresh_achievements(&mut self) {
        let count = self.help_count;
        for (slot, def) in self.unlocked.iter_mut().zip(ACHIEVEMENTS.iter()) {
            if count >= def.threshold {
                *slot = true;
            }
        }
    }

    fn tick_tweens(&mut self, dt_ms: f64) -> bool {
        let chains = self.total_chains.tick(dt_ms);
        let helpers = self.total_helpers.tick(dt_ms);
        let longest = self.longest_chain.tick(dt_ms);
        chains || helpers || longest
    }
}

// ---------------- Reducer & Actions -----------------

#[derive(Clone, Debug)]
pub enum AppAction {
    /// A visitor recorded a help. `boost` is pre-drawn from 1..=3 so the
    /// reducer stays deterministic.
    Participate { name: String, group_id: u32, boost: u32 },
    /// Ambient drift; slot, amount (0 or 1) and trend pre-drawn by the ticker.
    Drift { slot: usize, amount: u32, trend: Trend },
    TweenTick { dt_ms: f64 },
    CountdownTick,
    HighlightGroup { id: u32 },
    /// Reverts the pulse, but only while the given group still owns it.
    ClearHighlight { id: u32 },
    DismissConfirmation,
}

impl Reducible for AppState {
    type Action = AppAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        use AppAction::*;
        let mut new = (*self).clone();
        match action {
            Participate { name, group_id, boost } => {
                // Same permissive check the form makes: empty means untouched.
                if name.is_empty() {
                    return self;
                }
                let Some(idx) = new.groups.iter().position(|g| g.id == group_id) else {
                    return self;
                };
                {
                    let group = &mut new.groups[idx];
                    group.chain_length = group.chain_length.saturating_add(boost);
                    group.members = group.members.saturating_add(1);
                    group.trend = Trend::Up;
                }
                new.help_count = new.help_count.saturating_add(1);
                new.refresh_achievements();
                let next_chains = new.total_chains.value().saturating_add(1);
                new.total_chains.animate_to(next_chains, STAT_TWEEN_MS);
                let next_helpers = new.total_helpers.value().saturating_add(1);
                new.total_helpers.animate_to(next_helpers, STAT_TWEEN_MS);
                let longest = new.groups.iter().map(|g| g.chain_length).max().unwrap_or(0);
                if longest > new.longest_chain.value() {
                    new.longest_chain.animate_to(longest, LONGEST_TWEEN_MS);
                }
                new.confirmation = Some(Confirmation {
                    helper: name,
                    group: new.groups[idx].name.clone(),
                });
            }
            Drift { slot, amount, trend } => {
                let Some(group) = new.groups.get_mut(slot) else {
                    return self;
                };
                if amount == 0 && group.trend == trend {
                    return self;
                }
                group.chain_length = group.chain_length.saturating_add(amount);
                group.trend = trend;
            }
            TweenTick { dt_ms } => {
                if !new.tick_tweens(dt_ms) {
                    return self;
                }
            }
            CountdownTick => {
                if new.countdown_ms == 0 {
                    return self;
                }
                new.countdown_ms = new.countdown_ms.saturating_sub(COUNTDOWN_STEP_MS);
            }
            HighlightGroup { id } => {
                new.highlighted = Some(id);
            }
            ClearHighlight { id } => {
                if new.highlighted != Some(id) {
                    return self;
                }
                new.highlighted = None;
            }
            DismissConfirmation => {
                if new.confirmation.is_none() {
                    return self;
                }
                new.confirmation = None;
            }
        }
        Rc::new(new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> Rc<AppState> {
        Rc::new(AppState::seeded())
    }

    #[test]
    fn seed_ranking_matches_campaign_table() {
        let state = seeded();
        let ranked = ranked_groups(&state.groups);
        assert_eq!(ranked.len(), 8);
        assert_eq!(ranked[0].name, "Tech Innovators");
        assert_eq!(ranked[0].chain_length, 156);
        assert_eq!(ranked[7].name, "Senior Support");
        assert_eq!(ranked[7].chain_length, 65);
    }

    #[test]
    fn ranking_is_idempotent_and_stable_on_ties() {
        let state = seeded();
        assert_eq!(ranked_groups(&state.groups), ranked_groups(&state.groups));

        let tied = vec![
            Group {
                id: 1,
                name: "A".to_string(),
                members: 1,
                chain_length: 10,
                status: GroupStatus::Active,
                trend: Trend::Up,
            },
            Group {
                id: 2,
                name: "B".to_string(),
                members: 1,
                chain_length: 10,
                status: GroupStatus::Active,
                trend: Trend::Up,
            },
            Group {
                id: 3,
                name: "C".to_string(),
                members: 1,
                chain_length: 20,
                status: GroupStatus::Active,
                trend: Trend::Up,
            },
        ];
        let ranked = ranked_groups(&tied);
        let names: Vec<&str> = ranked.iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["C", "A", "B"]);
    }

    #[test]
    fn empty_name_changes_nothing() {
        let before = seeded();
        let after = before.clone().reduce(AppAction::Participate {
            name: String::new(),
            group_id: 1,
            boost: 2,
        });
        assert!(Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn unknown_group_changes_nothing() {
        let before = seeded();
        let after = before.clone().reduce(AppAction::Participate {
            name: "Ada".to_string(),
            group_id: 99,
            boost: 2,
        });
        assert!(Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn valid_participation_updates_group_and_counters() {
        let after = seeded().reduce(AppAction::Participate {
            name: "Ada".to_string(),
            group_id: 8,
            boost: 3,
        });
        let senior = after.groups.iter().find(|g| g.id == 8).unwrap();
        assert_eq!(senior.chain_length, 68);
        assert_eq!(senior.members, 28);
        assert_eq!(senior.trend, Trend::Up);
        assert_eq!(after.help_count, 1);
        assert_eq!(after.total_chains.value(), 248);
        assert_eq!(after.total_helpers.value(), 1843);
        // 68 does not beat the seeded 156, so the display target holds.
        assert_eq!(after.longest_chain.value(), 156);
        let confirmation = after.confirmation.as_ref().unwrap();
        assert_eq!(confirmation.helper, "Ada");
        assert_eq!(confirmation.group, "Senior Support");
        assert!(confirmation.message().contains("Senior Support's chain"));
    }

    #[test]
    fn every_boost_in_range_lands_exactly() {
        for boost in 1..=3 {
            let after = seeded().reduce(AppAction::Participate {
                name: "Ada".to_string(),
                group_id: 5,
                boost,
            });
            let health = after.groups.iter().find(|g| g.id == 5).unwrap();
            assert_eq!(health.chain_length, 98 + boost);
        }
    }

    #[test]
    fn participation_can_retarget_longest_chain() {
        let after = seeded().reduce(AppAction::Participate {
            name: "Ada".to_string(),
            group_id: 1,
            boost: 3,
        });
        assert_eq!(after.longest_chain.value(), 159);
        assert_eq!(after.longest_chain.shown(), 156);
        let after = after.reduce(AppAction::TweenTick { dt_ms: 1000.0 });
        assert_eq!(after.longest_chain.shown(), 159);
    }

    #[test]
    fn achievements_unlock_monotonically() {
        let mut state = seeded();
        assert_eq!(state.unlocked, [false, false, false]);
        for round in 1..=12u32 {
            state = state.reduce(AppAction::Participate {
                name: "Ada".to_string(),
                group_id: 2,
                boost: 1,
            });
            assert_eq!(state.help_count, round);
            assert_eq!(state.unlocked[0], round >= 1);
            assert_eq!(state.unlocked[1], round >= 5);
            assert_eq!(state.unlocked[2], round >= 10);
        }
        // Nothing past the last threshold relocks anything.
        assert_eq!(state.unlocked, [true, true, true]);
    }

    #[test]
    fn drift_adds_and_never_decreases() {
        let before = seeded();
        let after = before.clone().reduce(AppAction::Drift {
            slot: 2,
            amount: 1,
            trend: Trend::Stable,
        });
        assert_eq!(after.groups[2].chain_length, 129);
        assert_eq!(after.groups[2].trend, Trend::Stable);

        // Zero amount with a new trend still lands the trend.
        let turned = before.clone().reduce(AppAction::Drift {
            slot: 0,
            amount: 0,
            trend: Trend::Down,
        });
        assert_eq!(turned.groups[0].chain_length, 156);
        assert_eq!(turned.groups[0].trend, Trend::Down);

        // A literal no-op skips the state swap entirely.
        let same = before.clone().reduce(AppAction::Drift {
            slot: 0,
            amount: 0,
            trend: Trend::Up,
        });
        assert!(Rc::ptr_eq(&before, &same));

        // Out-of-range slots are ignored.
        let ignored = before.clone().reduce(AppAction::Drift {
            slot: 40,
            amount: 1,
            trend: Trend::Up,
        });
        assert!(Rc::ptr_eq(&before, &ignored));
    }

    #[test]
    fn countdown_clamps_at_zero() {
        let mut state = Rc::new(AppState {
            countdown_ms: 1500,
            ..AppState::seeded()
        });
        state = state.reduce(AppAction::CountdownTick);
        assert_eq!(state.countdown_ms, 500);
        state = state.reduce(AppAction::CountdownTick);
        assert_eq!(state.countdown_ms, 0);
        let again = state.clone().reduce(AppAction::CountdownTick);
        assert!(Rc::ptr_eq(&state, &again));
        assert_eq!(again.countdown_ms, 0);
    }

    #[test]
    fn tween_tick_without_active_tweens_is_a_no_op() {
        let before = seeded();
        let after = before.clone().reduce(AppAction::TweenTick { dt_ms: 16.0 });
        assert!(Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn submit_totals_animate_from_the_seeded_values() {
        let mut state = seeded().reduce(AppAction::Participate {
            name: "Ada".to_string(),
            group_id: 3,
            boost: 1,
        });
        assert_eq!(state.total_chains.shown(), 247);
        assert_eq!(state.total_helpers.shown(), 1842);
        let mut elapsed = 0.0;
        while elapsed < 600.0 {
            state = state.reduce(AppAction::TweenTick { dt_ms: 16.0 });
            elapsed += 16.0;
            assert!(state.total_chains.shown() <= 248);
            assert!(state.total_helpers.shown() <= 1843);
        }
        assert_eq!(state.total_chains.shown(), 248);
        assert_eq!(state.total_helpers.shown(), 1843);
    }

    #[test]
    fn mid_tween_progress_persists_across_ticks() {
        let state = seeded().reduce(AppAction::Participate {
            name: "Ada".to_string(),
            group_id: 6,
            boost: 2,
        });
        // A single 16 ms sample moves no digit yet, but it still counts.
        let ticked = state.clone().reduce(AppAction::TweenTick { dt_ms: 16.0 });
        assert!(!Rc::ptr_eq(&state, &ticked));
        assert_eq!(ticked.total_chains.shown(), 247);
        assert_eq!(ticked.total_helpers.shown(), 1842);
        let mut state = ticked;
        for _ in 0..40 {
            state = state.reduce(AppAction::TweenTick { dt_ms: 16.0 });
        }
        assert_eq!(state.total_chains.shown(), 248);
        assert_eq!(state.total_helpers.shown(), 1843);
    }

    #[test]
    fn modal_and_highlight_lifecycle() {
        let mut state = seeded().reduce(AppAction::Participate {
            name: "Ada".to_string(),
            group_id: 4,
            boost: 2,
        });
        assert!(state.confirmation.is_some());
        state = state.reduce(AppAction::HighlightGroup { id: 4 });
        assert_eq!(state.highlighted, Some(4));
        state = state.reduce(AppAction::ClearHighlight { id: 4 });
        assert_eq!(state.highlighted, None);
        let settled = state.clone().reduce(AppAction::ClearHighlight { id: 4 });
        assert!(Rc::ptr_eq(&state, &settled));
        state = state.reduce(AppAction::DismissConfirmation);
        assert!(state.confirmation.is_none());
        let settled = state.clone().reduce(AppAction::DismissConfirmation);
        assert!(Rc::ptr_eq(&state, &settled));
    }

    #[test]
    fn stale_pulse_clear_never_wipes_a_newer_pulse() {
        let mut state = seeded().reduce(AppAction::HighlightGroup { id: 2 });
        // A second help lands before the first pulse is due to revert.
        state = state.reduce(AppAction::HighlightGroup { id: 7 });
        assert_eq!(state.highlighted, Some(7));
        let after_stale = state.clone().reduce(AppAction::ClearHighlight { id: 2 });
        assert!(Rc::ptr_eq(&state, &after_stale));
        assert_eq!(after_stale.highlighted, Some(7));
        let cleared = after_stale.reduce(AppAction::ClearHighlight { id: 7 });
        assert_eq!(cleared.highlighted, None);
    }
}
