use super::achievements::AchievementsPanel;
use super::countdown::TournamentClock;
use super::leaderboard::Leaderboard;
use super::participation_form::ParticipationForm;
use super::stats_panel::StatsPanel;
use super::success_modal::SuccessModal;
use crate::model::{AppAction, AppState};
use crate::state::Tickers;
use crate::util::{clog, scroll_to};
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let state = use_reducer(AppState::seeded);

    // Recurring jobs (tween sampling, drift, countdown) live exactly as
    // long as the page; dropping the set cancels them together.
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let tickers = Tickers::start(state);
            move || drop(tickers)
        });
    }

    // Console trace for campaign milestones
    let last_counts = use_mut_ref(|| (0u32, 0u32));
    {
        let last_counts = last_counts.clone();
        use_effect_with(
            (state.help_count, state.longest_chain.value()),
            move |(help_count, longest)| {
                let (prev_help, prev_longest) = *last_counts.borrow();
                if *help_count != prev_help {
                    clog(&format!("help count: {} -> {}", prev_help, help_count));
                }
                if *longest != prev_longest {
                    clog(&format!("longest chain: {} -> {}", prev_longest, longest));
                }
                *last_counts.borrow_mut() = (*help_count, *longest);
                || ()
            },
        );
    }

    let on_dismiss = {
        let state = state.clone();
        Callback::from(move |_| state.dispatch(AppAction::DismissConfirmation))
    };
    let go_leaderboard = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to("leaderboard");
    });
    let go_join = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to("join");
    });
    let go_achievements = Callback::from(|e: MouseEvent| {
        e.prevent_default();
        scroll_to("achievements");
    });
    let start_helping = Callback::from(|_: MouseEvent| scroll_to("join"));

    let confirmation_message = state.confirmation.as_ref().map(|c| c.message());
    let nav_link = "color:#8b949e; text-decoration:none; font-size:14px;";

    html! {<div style="min-height:100vh; display:flex; flex-direction:column; gap:48px; padding-bottom:64px;">
        <nav style="position:sticky; top:0; display:flex; align-items:center; gap:18px; padding:14px 28px; background:rgba(14,17,22,0.92); border-bottom:1px solid #30363d; z-index:10;">
            <span style="font-weight:700; font-size:17px;">{"Kindness Chain"}</span>
            <a href="#leaderboard" onclick={go_leaderboard} style={nav_link}>{"Leaderboard"}</a>
            <a href="#join" onclick={go_join} style={nav_link}>{"Join the Chain"}</a>
            <a href="#achievements" onclick={go_achievements} style={nav_link}>{"Achievements"}</a>
            <span style="margin-left:auto; font-size:13px; opacity:0.85;">
                {"Tournament: "}
                <TournamentClock remaining_ms={state.countdown_ms} detailed={false} />
            </span>
        </nav>
        <header style="display:flex; flex-direction:column; align-items:center; gap:18px; text-align:center; padding:40px 16px 0;">
            <h1 style="margin:0; font-size:40px;">{"The Kindness Chain Tournament"}</h1>
            <p style="margin:0; max-width:560px; opacity:0.8; line-height:1.6;">
                {"Eight groups, one goal: the longest chain of good deeds. Lend a hand to your favorite group and watch their chain grow."}
            </p>
            <div style="font-size:18px;">
                {"Tournament ends in "}
                <TournamentClock remaining_ms={state.countdown_ms} detailed={true} />
            </div>
            <button onclick={start_helping} style="padding:12px 26px; background:#6366f1; border:1px solid #4f46e5; border-radius:10px; color:#fff; font-weight:600; font-size:16px;">{"Start Helping"}</button>
        </header>
        <section style="padding:0 16px;">
            <StatsPanel
                total_chains={state.total_chains.shown()}
                total_helpers={state.total_helpers.shown()}
                longest_chain={state.longest_chain.shown()}
            />
        </section>
        <section id="leaderboard" style="padding:0 16px;">
            { section_title("Group Leaderboard") }
            <Leaderboard groups={state.groups.clone()} highlighted={state.highlighted} />
        </section>
        <section id="join" style="padding:0 16px;">
            { section_title("Join the Chain") }
            <ParticipationForm state={state.clone()} />
        </section>
        <section id="achievements" style="padding:0 16px;">
            { section_title("Achievements") }
            <AchievementsPanel unlocked={state.unlocked} />
        </section>
        <SuccessModal message={confirmation_message} on_close={on_dismiss} />
    </div>}
}

fn section_title(title: &'static str) -> Html {
    html! {<h2 style="text-align:center; margin:0 0 18px; font-size:26px;">{ title }</h2>}
}
