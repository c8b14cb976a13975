use crate::model::{Group, ranked_groups};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct LeaderboardProps {
    pub groups: Vec<Group>,
    /// Group pulsing after a fresh help, matched by id.
    pub highlighted: Option<u32>,
}

#[function_component(Leaderboard)]
pub fn leaderboard(props: &LeaderboardProps) -> Html {
    let ranked = ranked_groups(&props.groups);
    html! {<div style="display:flex; flex-direction:column; gap:10px; max-width:720px; margin:0 auto;">
        { for ranked.iter().enumerate().map(|(i, group)| {
            leaderboard_row(group, i + 1, props.highlighted == Some(group.id))
        }) }
    </div>}
}

fn rank_medal(rank: usize) -> &'static str {
    match rank {
        1 => "🥇",
        2 => "🥈",
        3 => "🥉",
        _ => "",
    }
}

fn rank_accent(rank: usize) -> &'static str {
    match rank {
        1 => "border-left:4px solid #d4af37;",
        2 => "border-left:4px solid #8b949e;",
        3 => "border-left:4px solid #bd561d;",
        _ => "border-left:4px solid transparent;",
    }
}

fn leaderboard_row(group: &Group, rank: usize, pulsing: bool) -> Html {
    let pulse = if pulsing {
        "transform:scale(1.05); box-shadow:0 10px 30px rgba(99, 102, 241, 0.4);"
    } else {
        ""
    };
    html! {<div
        key={group.id.to_string()}
        data-group-id={group.id.to_string()}
        style={format!("display:flex; align-items:center; gap:14px; background:#161b22; border:1px solid #30363d; border-radius:10px; padding:12px 18px; transition:all 0.5s ease; {} {}", rank_accent(rank), pulse)}>
        <div style="min-width:64px; display:flex; align-items:center; gap:6px;">
            <span style="font-size:20px;">{ rank_medal(rank) }</span>
            <span style="font-weight:700; opacity:0.8;">{ format!("#{rank}") }</span>
        </div>
        <div style="flex:1; display:flex; flex-direction:column; gap:2px;">
            <span style="font-weight:600;">{ group.name.clone() }</span>
            <span style="font-size:12px; opacity:0.7;">{ format!("{} members", group.members) }</span>
        </div>
        <div style="display:flex; flex-direction:column; align-items:flex-end; gap:2px;">
            <span style="font-size:22px; font-weight:700; font-variant-numeric:tabular-nums; color:#58a6ff;">{ group.chain_length }</span>
            <span style="font-size:11px; opacity:0.7;">{"chain length"}</span>
            <span style="font-size:12px;">{ format!("{} {}", group.trend.glyph(), group.status.label()) }</span>
        </div>
    </div>}
}
