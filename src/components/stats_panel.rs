use crate::util::{format_thousands, reset_tilt, tilt_card};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatsPanelProps {
    pub total_chains: u32,
    pub total_helpers: u32,
    pub longest_chain: u32,
}

#[function_component(StatsPanel)]
pub fn stats_panel(props: &StatsPanelProps) -> Html {
    html! {<div style="display:flex; gap:16px; flex-wrap:wrap; justify-content:center;">
        { stat_card("🔗", "Total Chains", props.total_chains, "#58a6ff") }
        { stat_card("🤝", "Total Helpers", props.total_helpers, "#3fb950") }
        { stat_card("🏆", "Longest Chain", props.longest_chain, "#d4af37") }
    </div>}
}

fn stat_card(icon: &'static str, label: &'static str, value: u32, accent: &'static str) -> Html {
    let onmousemove = Callback::from(|e: MouseEvent| tilt_card(&e));
    let onmouseleave = Callback::from(|e: MouseEvent| reset_tilt(&e));
    html! {<div {onmousemove} {onmouseleave} style="background:#161b22; border:1px solid #30363d; border-radius:12px; padding:18px 26px; min-width:170px; display:flex; flex-direction:column; align-items:center; gap:6px; transition:transform 0.1s ease; will-change:transform;">
        <span style="font-size:26px;">{ icon }</span>
        <span style={format!("font-size:30px; font-weight:700; font-variant-numeric:tabular-nums; color:{};", accent)}>{ format_thousands(value) }</span>
        <span style="font-size:13px; opacity:0.7;">{ label }</span>
    </div>}
}
