//! Debug domain: info overlay layout.

use bevy::prelude::*;

/// Marker for the debug overlay root
#[derive(Component, Debug)]
pub struct DebugOverlay;

/// Marker for the overlay text block
#[derive(Component, Debug)]
pub struct DebugOverlayText;

pub(crate) fn spawn_debug_overlay(commands: &mut Commands) {
    commands
        .spawn((
            DebugOverlay,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(16.0),
                top: Val::Px(16.0),
                padding: UiRect::all(Val::Px(10.0)),
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(4.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.15, 0.85)),
            ZIndex(500),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("MOVEMENT DEBUG"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.7, 0.3)),
            ));
            parent.spawn((
                DebugOverlayText,
                Text::new(""),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
            ));
        });
}
