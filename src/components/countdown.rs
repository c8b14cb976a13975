use crate::util::{format_countdown_long, format_countdown_short};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct TournamentClockProps {
    pub remaining_ms: u64,
    /// Long form includes minutes; the nav badge uses the short form.
    pub detailed: bool,
}

#[function_component(TournamentClock)]
pub fn tournament_clock(props: &TournamentClockProps) -> Html {
    let label = if props.detailed {
        format_countdown_long(props.remaining_ms)
    } else {
        format_countdown_short(props.remaining_ms)
    };
    html! {<span style="font-variant-numeric:tabular-nums; font-weight:600;">{ label }</span>}
}
