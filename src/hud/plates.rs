//! Plates shared by every job window
//!
//! Layout, from the viewport centre outwards:
//!
//! ```text
//!            name      8,000 | 100   [ resource ]   100 | 45K       name    tot
//!   [======== health ==========]                 [======== target ====][=tot=]
//! ```

use super::{Frame, percent};
use crate::actor::{ActorId, ActorSnapshot};
use crate::color::{BLACK, ColorSet, resolve_colors};
use crate::geometry::compute_bar;
use crate::render::draw_bar;
use crate::text::{Abbreviated, KiloFormat};
use glam::Vec2;

/// Player health plate, left of centre. Clicking it targets the player.
pub fn draw_health_bar(frame: &mut Frame<'_>, player: &ActorSnapshot<'_>) {
    let layout = frame.config.layout;
    let labels = frame.config.labels;
    let center = frame.center();
    let scale = player.hp.ratio();

    let anchor = Vec2::new(
        center.x - layout.bar_width - layout.x_offset,
        center.y + layout.y_offset,
    );
    let label_y = anchor.y - labels.rise;

    frame.format(format_args!("{}", Abbreviated::new(player.name, labels.name_chars)));
    frame.draw_label(Vec2::new(anchor.x + labels.padding, label_y));

    let percentage_width = frame.text_size("100").x;
    let hp_size = frame.format(format_args!("{:>6} | ", KiloFormat(player.hp.max)));
    frame.draw_label(Vec2::new(
        anchor.x + layout.bar_width - hp_size.x - percentage_width - labels.padding,
        label_y,
    ));

    frame.format(format_args!("{:>3}", percent(scale)));
    frame.draw_label(Vec2::new(
        anchor.x + layout.bar_width - percentage_width - labels.padding,
        label_y,
    ));

    let colors = resolve_colors(player, &frame.actors, &frame.config.colors);
    let bar = compute_bar(anchor, layout.bar_width, layout.bar_height, scale).with_colors(colors);
    draw_bar(frame.draw, &bar);

    if frame.draw.is_clicked(bar.origin(), bar.max()) {
        frame.request_target(player.id);
    }
}

/// Thin mana bar above the plates, centred. Skipped for actors without mana.
pub fn draw_resource_bar(frame: &mut Frame<'_>, player: &ActorSnapshot<'_>) {
    let Some(mp) = player.mp else {
        return;
    };

    let resource = frame.config.resource_bar;
    let center = frame.center();
    let anchor = Vec2::new(
        center.x - resource.width / 2.0,
        center.y + frame.config.layout.y_offset - resource.rise,
    );

    let colors = ColorSet::new(
        resource.background,
        resource.gradient_left,
        resource.gradient_right,
        BLACK,
    );
    let bar = compute_bar(anchor, resource.width, resource.height, mp.ratio()).with_colors(colors);
    draw_bar(frame.draw, &bar);
}

/// Target plate, right of centre, followed by the target-of-target plate.
///
/// Returns the target drawn, if any.
pub fn draw_target_bar<'a>(frame: &mut Frame<'a>) -> Option<ActorSnapshot<'a>> {
    let target = frame.actors.current_target()?;

    let layout = frame.config.layout;
    let labels = frame.config.labels;
    let center = frame.center();
    let scale = target.hp.ratio();

    let anchor = Vec2::new(center.x + layout.x_offset, center.y + layout.y_offset);
    let label_y = anchor.y - labels.rise;

    let colors = resolve_colors(&target, &frame.actors, &frame.config.colors);
    let bar = compute_bar(anchor, layout.bar_width, layout.bar_height, scale).with_colors(colors);
    draw_bar(frame.draw, &bar);

    let percentage_width = frame.text_size("100").x;
    let size = frame.format(format_args!("{:>3}", percent(scale)));
    frame.draw_label(Vec2::new(
        anchor.x + labels.padding + percentage_width - size.x,
        label_y,
    ));

    frame.format(format_args!(" | {:<6}", KiloFormat(target.hp.max)));
    frame.draw_label(Vec2::new(anchor.x + labels.padding + percentage_width, label_y));

    let name_size = frame.format(format_args!(
        "{}",
        Abbreviated::new(target.name, labels.name_chars)
    ));
    frame.draw_label(Vec2::new(
        anchor.x + layout.bar_width - name_size.x - labels.padding,
        label_y,
    ));

    draw_target_of_target_bar(frame, target.target_id);
    Some(target)
}

/// Small plate for whatever the target is targeting. Clicking it retargets.
pub fn draw_target_of_target_bar(frame: &mut Frame<'_>, id: ActorId) {
    let Some(actor) = frame.actors.resolve_by_id(id) else {
        return;
    };

    let layout = frame.config.layout;
    let tot = frame.config.target_of_target;
    let labels = frame.config.labels;
    let center = frame.center();

    let anchor = Vec2::new(
        center.x + layout.x_offset + layout.bar_width + tot.gap,
        center.y + layout.y_offset,
    );

    let name_size = frame.format(format_args!(
        "{}",
        Abbreviated::new(actor.name, labels.target_of_target_name_chars)
    ));
    frame.draw_label(Vec2::new(
        anchor.x + tot.width / 2.0 - name_size.x / 2.0,
        anchor.y - labels.rise,
    ));

    let colors = resolve_colors(&actor, &frame.actors, &frame.config.colors);
    let bar = compute_bar(anchor, tot.width, tot.height, actor.hp.ratio()).with_colors(colors);
    draw_bar(frame.draw, &bar);

    if frame.draw.is_clicked(bar.origin(), bar.max()) {
        frame.request_target(actor.id);
    }
}
