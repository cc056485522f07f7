use chrono::Datelike;

use crate::i18n::{FieldText, Locale};
use crate::models::{BookingDraft, Field, FieldErrors, TimeSlot};
use crate::services::booking_form::FormState;
use crate::services::calendar::MonthView;

use super::{escape, icons, layout};

fn render_errors(errors: &FieldErrors, field: Field) -> String {
    errors
        .get(field)
        .iter()
        .map(|msg| {
            format!(
                "<p class=\"field-error\" data-field=\"{}\">{}</p>",
                field.key(),
                escape(msg)
            )
        })
        .collect::<Vec<_>>()
        .join("")
}

fn render_input(
    field: Field,
    text: &FieldText,
    value: &str,
    input_type: &str,
    errors: &FieldErrors,
) -> String {
    let invalid = if errors.contains(field) { " invalid" } else { "" };
    format!(
        "<div class=\"field\">\n\
         <label for=\"{key}\">{label}</label>\n\
         <input id=\"{key}\" name=\"{key}\" type=\"{input_type}\" class=\"input{invalid}\" \
         placeholder=\"{placeholder}\" value=\"{value}\">\n\
         {errors}\n\
         </div>",
        key = field.key(),
        label = escape(text.label),
        placeholder = escape(text.placeholder),
        value = escape(value),
        errors = render_errors(errors, field),
    )
}

fn render_textarea(field: Field, text: &FieldText, value: &str, errors: &FieldErrors) -> String {
    let invalid = if errors.contains(field) { " invalid" } else { "" };
    format!(
        "<div class=\"field\">\n\
         <label for=\"{key}\">{label}</label>\n\
         <textarea id=\"{key}\" name=\"{key}\" class=\"input textarea{invalid}\" \
         placeholder=\"{placeholder}\">{value}</textarea>\n\
         {errors}\n\
         </div>",
        key = field.key(),
        label = escape(text.label),
        placeholder = escape(text.placeholder),
        value = escape(value),
        errors = render_errors(errors, field),
    )
}

/// Day picker. Days that cannot be booked are rendered as disabled radios,
/// which the browser neither lets the visitor pick nor submits.
fn render_calendar(draft: &BookingDraft, view: &MonthView, locale: Locale) -> String {
    let catalog = locale.catalog();
    let key = Field::AppointmentDate.key();
    let mut html = String::new();

    // A date that can no longer be booked (e.g. the day rolled over while
    // the form was open) is never offered back as picked.
    let picked = draft.appointment_date.filter(|date| view.is_selectable(*date));

    let selected_label = match picked {
        Some(date) => escape(&locale.format_date(date)),
        None => format!("<span class=\"muted\">{}</span>", escape(catalog.date_placeholder)),
    };
    html.push_str(&format!(
        "<div class=\"date-display\">{icon}<span>{selected_label}</span></div>\n",
        icon = icons::calendar("icon-sm"),
    ));

    // Keep a date picked in another month in the same radio group so
    // navigating months does not drop it.
    if let Some(date) = picked {
        if view.days().all(|d| d.date != date) {
            html.push_str(&format!(
                "<label class=\"day selected carried\"><input type=\"radio\" name=\"{key}\" \
                 value=\"{value}\" checked><span>{label}</span></label>\n",
                value = date.format("%Y-%m-%d"),
                label = escape(&locale.format_date(date)),
            ));
        }
    }

    let month_name = catalog.months[view.month.first_day().month0() as usize];
    html.push_str(&format!(
        "<div class=\"calendar-nav\">\n\
         <button type=\"submit\" class=\"nav\" formmethod=\"get\" formaction=\"/book\" \
         formnovalidate name=\"month\" value=\"{prev}\" aria-label=\"{prev_label}\">&lsaquo;</button>\n\
         <span class=\"calendar-title\">{month_name} {year}</span>\n\
         <button type=\"submit\" class=\"nav\" formmethod=\"get\" formaction=\"/book\" \
         formnovalidate name=\"month\" value=\"{next}\" aria-label=\"{next_label}\">&rsaquo;</button>\n\
         </div>\n",
        prev = view.prev,
        next = view.next,
        prev_label = escape(catalog.previous_month),
        next_label = escape(catalog.next_month),
        year = view.month.year,
    ));

    html.push_str("<table class=\"calendar\">\n<thead><tr>");
    for day in view.weekdays() {
        html.push_str(&format!("<th>{}</th>", escape(locale.weekday_name(day))));
    }
    html.push_str("</tr></thead>\n<tbody>\n");

    for week in &view.weeks {
        html.push_str("<tr>");
        for cell in week {
            let Some(day) = cell else {
                html.push_str("<td></td>");
                continue;
            };
            let checked = picked == Some(day.date);
            let mut class = String::from("day");
            if checked {
                class.push_str(" selected");
            }
            if !day.selectable {
                class.push_str(" disabled");
            }
            html.push_str(&format!(
                "<td><label class=\"{class}\"><input type=\"radio\" name=\"{key}\" \
                 value=\"{value}\"{checked}{disabled}><span>{num}</span></label></td>",
                value = day.date.format("%Y-%m-%d"),
                checked = if checked { " checked" } else { "" },
                disabled = if day.selectable { "" } else { " disabled" },
                num = day.date.day(),
            ));
        }
        html.push_str("</tr>\n");
    }
    html.push_str("</tbody>\n</table>\n");
    html
}

fn render_slots(draft: &BookingDraft) -> String {
    let key = Field::AppointmentTime.key();
    TimeSlot::ALL
        .iter()
        .map(|slot| {
            let selected = draft.is_slot_selected(*slot);
            format!(
                "<label class=\"slot{class}\"><input type=\"radio\" name=\"{key}\" \
                 value=\"{label}\"{checked}><span>{label}</span></label>",
                class = if selected { " selected" } else { "" },
                checked = if selected { " checked" } else { "" },
                label = escape(slot.label()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_booking_page(form: &FormState, view: &MonthView, locale: Locale) -> String {
    let catalog = locale.catalog();
    let draft = &form.draft;
    let errors = &form.errors;

    let toast = form
        .notice
        .map(|notice| {
            format!(
                "<div class=\"toast success\" role=\"status\">{}</div>\n",
                escape(notice)
            )
        })
        .unwrap_or_default();

    let body = format!(
        "{toast}<main class=\"booking\">\n\
         <div class=\"panel\">\n\
         <header class=\"panel-header\">\n\
         <h1>{title}</h1>\n\
         <p>{subtitle}</p>\n\
         </header>\n\
         <form method=\"post\" action=\"/book\" class=\"panel-body\" novalidate>\n\
         <div class=\"grid\">\n{name}\n{email}\n</div>\n\
         <div class=\"grid\">\n{phone}\n{organization}\n</div>\n\
         {visit_reason}\n\
         {message}\n\
         <fieldset class=\"appointment\">\n\
         <legend>{calendar_icon}{details}</legend>\n\
         <div class=\"grid\">\n\
         <div class=\"field\">\n\
         <span class=\"label\">{date_label}</span>\n\
         {calendar}\
         {date_errors}\n\
         </div>\n\
         <div class=\"field\">\n\
         <span class=\"label\">{clock_icon}{time_label}</span>\n\
         <div class=\"slots\">\n{slots}\n</div>\n\
         {time_errors}\n\
         </div>\n\
         </div>\n\
         </fieldset>\n\
         <div class=\"actions\"><button type=\"submit\" class=\"submit\">{submit}</button></div>\n\
         </form>\n\
         </div>\n\
         </main>",
        title = escape(catalog.booking_title),
        subtitle = escape(catalog.booking_subtitle),
        name = render_input(Field::Name, &catalog.name, &draft.name, "text", errors),
        email = render_input(Field::Email, &catalog.email, &draft.email, "email", errors),
        phone = render_input(Field::Phone, &catalog.phone, &draft.phone, "tel", errors),
        organization = render_input(
            Field::Organization,
            &catalog.organization,
            &draft.organization,
            "text",
            errors
        ),
        visit_reason = render_input(
            Field::VisitReason,
            &catalog.visit_reason,
            &draft.visit_reason,
            "text",
            errors
        ),
        message = render_textarea(Field::Message, &catalog.message, &draft.message, errors),
        calendar_icon = icons::calendar("icon-md"),
        details = escape(catalog.appointment_details),
        date_label = escape(catalog.date_label),
        calendar = render_calendar(draft, view, locale),
        date_errors = render_errors(errors, Field::AppointmentDate),
        clock_icon = icons::clock("icon-sm"),
        time_label = escape(catalog.time_label),
        slots = render_slots(draft),
        time_errors = render_errors(errors, Field::AppointmentTime),
        submit = escape(catalog.submit),
    );

    layout(locale, catalog.booking_title, &body)
}
