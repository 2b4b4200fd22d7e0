use bevy::prelude::*;
use vip_salon::{
    CelebrityProfile, ItemStatus, TierStatus, count_owned, current_tier, item_status, next_tier, progress_to_next,
    tier_status,
};

use super::resources::{HudText, SelectionState, SessionState};
use super::state::SalonTab;

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        Name::new("HudText"),
        HudText,
        Text::new("Opening the salon..."),
        TextFont {
            font_size: 18.0,
            ..default()
        },
        TextColor(Color::srgb(0.96, 0.93, 0.86)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(16.0),
            top: Val::Px(12.0),
            ..default()
        },
    ));
}

pub fn refresh_hud(
    session: Res<SessionState>,
    selection: Res<SelectionState>,
    tab: Res<State<SalonTab>>,
    mut hud_query: Query<&mut Text, With<HudText>>,
) {
    let Ok(mut hud) = hud_query.get_single_mut() else {
        return;
    };

    let economy = session.session.state();
    let (salon_name, capacity) = current_tier(&session.tiers, economy)
        .map(|tier| (tier.name.as_str(), tier.capacity))
        .unwrap_or(("-", 0));

    let progress_line = match (
        next_tier(&session.tiers, economy),
        progress_to_next(&session.tiers, economy),
    ) {
        (Some(next), Some(percent)) => format!("Next: {} ({percent}%)", next.name),
        _ => "Top of the ladder".to_string(),
    };

    let rows = match tab.get() {
        SalonTab::Salon => session
            .tiers
            .iter()
            .enumerate()
            .map(|(index, tier)| {
                let label = match tier_status(tier, economy) {
                    TierStatus::Current => "current",
                    TierStatus::Owned => "passed",
                    TierStatus::Available => "upgrade",
                    TierStatus::Locked => "locked",
                };
                format!(
                    "{} {} - {} seats - ${} [{label}]",
                    cursor(index, &selection),
                    tier.name,
                    tier.capacity,
                    tier.cost
                )
            })
            .collect::<Vec<_>>(),
        SalonTab::Celebrities => session
            .catalog
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let label = match item_status(item, economy) {
                    ItemStatus::Owned => "owned",
                    ItemStatus::Affordable => "buy",
                    ItemStatus::TooExpensive => "too expensive",
                };
                format!(
                    "{} {} ({}, {} stars) - ${} [{label}]",
                    cursor(index, &selection),
                    item.attributes.name,
                    item.attributes.category,
                    item.attributes.stars,
                    item.price
                )
            })
            .collect::<Vec<_>>(),
    };

    let tab_label = match tab.get() {
        SalonTab::Salon => "SALON",
        SalonTab::Celebrities => "CELEBRITIES",
    };

    let detail = match tab.get() {
        SalonTab::Salon => String::new(),
        SalonTab::Celebrities => session
            .catalog
            .at(selection.index)
            .map(|item| celebrity_detail(&item.attributes))
            .unwrap_or_default(),
    };

    *hud = Text::new(format!(
        "Capital: ${}  Salon: {} ({} VIP seats)  {}\nCelebrities owned: {}/{}\n[{}]  Tab switch, Up/Down select, Enter buy/upgrade, N new game\n\n{}\n\n{}\n\n{}",
        economy.capital(),
        salon_name,
        capacity,
        progress_line,
        count_owned(&session.catalog, economy),
        session.catalog.len(),
        tab_label,
        rows.join("\n"),
        detail,
        session.last_result.as_deref().unwrap_or(""),
    ));
}

fn cursor(index: usize, selection: &SelectionState) -> &'static str {
    if index == selection.index { ">" } else { " " }
}

fn celebrity_detail(profile: &CelebrityProfile) -> String {
    let wins = profile
        .wins
        .map(|wins| format!("  Wins: {wins}"))
        .unwrap_or_default();
    format!(
        "{} ({})  Intelligence {}/10  Force {}/10  Agility {}/10{wins}\n{}",
        profile.name,
        profile.nationality,
        profile.stats.intelligence,
        profile.stats.force,
        profile.stats.agility,
        profile.biography
    )
}

#[cfg(test)]
mod tests {
    use vip_salon::{CelebrityProfile, CelebrityStats};

    use super::celebrity_detail;

    #[test]
    fn celebrity_detail_shows_stats_origin_and_biography() {
        let profile = CelebrityProfile {
            name: "Kenji Arata".to_string(),
            category: "Chess Grandmaster".to_string(),
            stars: 3,
            stats: CelebrityStats {
                intelligence: 10,
                force: 2,
                agility: 3,
            },
            wins: Some(2),
            nationality: "Japanese".to_string(),
            biography: "Calm under pressure.".to_string(),
        };

        let detail = celebrity_detail(&profile);

        assert!(detail.contains("Kenji Arata (Japanese)"));
        assert!(detail.contains("Intelligence 10/10  Force 2/10  Agility 3/10"));
        assert!(detail.contains("Wins: 2"));
        assert!(detail.ends_with("Calm under pressure."));

        let no_wins = CelebrityProfile {
            wins: None,
            ..profile
        };
        assert!(!celebrity_detail(&no_wins).contains("Wins"));
    }
}
