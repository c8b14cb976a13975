use crate::model::{ACHIEVEMENTS, AchievementDef};
use crate::util::{reset_tilt, tilt_card};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AchievementsPanelProps {
    /// Unlock state per ACHIEVEMENTS slot.
    pub unlocked: [bool; 3],
}

#[function_component(AchievementsPanel)]
pub fn achievements_panel(props: &AchievementsPanelProps) -> Html {
    html! {<div style="display:flex; gap:16px; flex-wrap:wrap; justify-content:center;">
        { for ACHIEVEMENTS.iter().zip(props.unlocked.iter()).map(|(def, unlocked)| achievement_card(def, *unlocked)) }
    </div>}
}

fn achievement_card(def: &AchievementDef, unlocked: bool) -> Html {
    let onmousemove = Callback::from(|e: MouseEvent| tilt_card(&e));
    let onmouseleave = Callback::from(|e: MouseEvent| reset_tilt(&e));
    let look = if unlocked {
        "border:1px solid #6366f1; box-shadow:0 0 18px rgba(99,102,241,0.25);"
    } else {
        "border:1px solid #30363d; opacity:0.45; filter:grayscale(0.8);"
    };
    html! {<div {onmousemove} {onmouseleave} style={format!("background:#161b22; border-radius:12px; padding:18px 22px; width:200px; display:flex; flex-direction:column; align-items:center; gap:8px; text-align:center; transition:transform 0.1s ease, opacity 0.3s ease; will-change:transform; {}", look)}>
        <span style="font-size:30px;">{ def.icon }</span>
        <span style="font-weight:700;">{ def.title }</span>
        <span style="font-size:12px; opacity:0.75;">{ def.blurb }</span>
        <span style="font-size:11px; opacity:0.6;">{ if unlocked { "Unlocked" } else { "Locked" } }</span>
    </div>}
}
