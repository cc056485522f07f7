use crate::i18n::Locale;
use crate::models::{features, FeatureCard};

use super::{escape, icons, layout};

fn render_card(index: usize, card: &FeatureCard) -> String {
    format!(
        "<article class=\"card\" style=\"background: var({gradient}); box-shadow: var(--shadow-glow);\">\n\
         <div class=\"card-arrow\">{arrow}</div>\n\
         <svg class=\"card-pattern\" viewBox=\"0 0 100 100\" preserveAspectRatio=\"none\" aria-hidden=\"true\">\
         <pattern id=\"pattern-{index}\" x=\"0\" y=\"0\" width=\"20\" height=\"20\" patternUnits=\"userSpaceOnUse\">\
         <circle cx=\"10\" cy=\"10\" r=\"1\" fill=\"white\" opacity=\"0.5\"/></pattern>\
         <rect x=\"0\" y=\"0\" width=\"100\" height=\"100\" fill=\"url(#pattern-{index})\"/></svg>\n\
         <div class=\"card-body\">\n\
         <div class=\"card-backdrop\">{backdrop}</div>\n\
         <div class=\"card-icon\">{icon}</div>\n\
         <h3>{title}</h3>\n\
         <p>{description}</p>\n\
         </div>\n\
         </article>",
        gradient = card.gradient.token(),
        arrow = icons::arrow_up_right("icon-sm"),
        backdrop = icons::feature_icon(card.icon, "icon-xl", "0.5"),
        icon = icons::feature_icon(card.icon, "icon-lg", "1.5"),
        title = escape(card.title),
        description = escape(card.description),
    )
}

pub fn render_landing(locale: Locale) -> String {
    let catalog = locale.catalog();
    let cards = features(locale)
        .iter()
        .enumerate()
        .map(|(i, card)| render_card(i, card))
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        "<main class=\"showcase\">\n\
         <section>\n\
         <header class=\"showcase-header\">\n\
         <p class=\"eyebrow\">{eyebrow}</p>\n\
         <h2>{title}</h2>\n\
         <div class=\"divider\"><span class=\"line\"></span>\
         <span class=\"badge\">{heart}</span><span class=\"line\"></span></div>\n\
         </header>\n\
         <div class=\"cards\">\n{cards}\n</div>\n\
         <p class=\"cta\"><a href=\"/book\">{book}</a></p>\n\
         </section>\n\
         </main>",
        eyebrow = escape(catalog.showcase_eyebrow),
        title = escape(catalog.showcase_title),
        heart = icons::heart("icon-sm"),
        book = escape(catalog.book_visit),
    );

    layout(locale, catalog.showcase_title, &body)
}
