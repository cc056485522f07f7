use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Booking form state as the visitor fills it in.
///
/// The validator codes double as the public field keys so a failed check
/// maps straight back to a [`Field`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingDraft {
    #[validate(length(min = 2, code = "name"))]
    pub name: String,
    #[validate(email(code = "email"))]
    pub email: String,
    #[validate(length(min = 10, code = "phone"))]
    pub phone: String,
    #[validate(length(min = 2, code = "organization"))]
    pub organization: String,
    #[validate(length(min = 3, code = "visitReason"))]
    pub visit_reason: String,
    #[validate(length(min = 10, code = "message"))]
    pub message: String,
    #[serde(deserialize_with = "blank_as_none_date")]
    pub appointment_date: Option<NaiveDate>,
    #[serde(deserialize_with = "blank_as_none")]
    pub appointment_time: Option<String>,
}

impl BookingDraft {
    /// Picks a slot. The highlight is derived from `appointment_time`, so
    /// selecting one slot deselects any other.
    pub fn select_slot(&mut self, label: &str) {
        if let Some(slot) = TimeSlot::parse(label) {
            self.appointment_time = Some(slot.label().to_string());
        }
    }

    pub fn is_slot_selected(&self, slot: TimeSlot) -> bool {
        self.appointment_time.as_deref() == Some(slot.label())
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// A draft that passed every check. Only ever handed to a submission sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub visit_reason: String,
    pub message: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: TimeSlot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    #[serde(rename = "9:00 AM")]
    NineAm,
    #[serde(rename = "10:00 AM")]
    TenAm,
    #[serde(rename = "11:00 AM")]
    ElevenAm,
    #[serde(rename = "2:00 PM")]
    TwoPm,
    #[serde(rename = "3:00 PM")]
    ThreePm,
    #[serde(rename = "4:00 PM")]
    FourPm,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 6] = [
        TimeSlot::NineAm,
        TimeSlot::TenAm,
        TimeSlot::ElevenAm,
        TimeSlot::TwoPm,
        TimeSlot::ThreePm,
        TimeSlot::FourPm,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            TimeSlot::NineAm => "9:00 AM",
            TimeSlot::TenAm => "10:00 AM",
            TimeSlot::ElevenAm => "11:00 AM",
            TimeSlot::TwoPm => "2:00 PM",
            TimeSlot::ThreePm => "3:00 PM",
            TimeSlot::FourPm => "4:00 PM",
        }
    }

    pub fn parse(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.label() == label)
    }

    pub fn start_time(&self) -> NaiveTime {
        let hour = match self {
            TimeSlot::NineAm => 9,
            TimeSlot::TenAm => 10,
            TimeSlot::ElevenAm => 11,
            TimeSlot::TwoPm => 14,
            TimeSlot::ThreePm => 15,
            TimeSlot::FourPm => 16,
        };
        NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Organization,
    VisitReason,
    Message,
    AppointmentDate,
    AppointmentTime,
}

impl Field {
    pub fn key(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Organization => "organization",
            Field::VisitReason => "visitReason",
            Field::Message => "message",
            Field::AppointmentDate => "appointmentDate",
            Field::AppointmentTime => "appointmentTime",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "name" => Some(Field::Name),
            "email" => Some(Field::Email),
            "phone" => Some(Field::Phone),
            "organization" => Some(Field::Organization),
            "visitReason" => Some(Field::VisitReason),
            "message" => Some(Field::Message),
            "appointmentDate" => Some(Field::AppointmentDate),
            "appointmentTime" => Some(Field::AppointmentTime),
            _ => None,
        }
    }
}

/// Per-field validation messages, in form order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, Vec<String>>);

impl FieldErrors {
    pub fn add(&mut self, field: Field, message: impl Into<String>) {
        let messages = self.0.entry(field).or_default();
        let message = message.into();
        if !messages.contains(&message) {
            messages.push(message);
        }
    }

    pub fn get(&self, field: Field) -> &[String] {
        self.0.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

// Anything that is not a `YYYY-MM-DD` date counts as "no date picked".
// Signed or five-digit years are refused so every picked month stays
// navigable.
fn blank_as_none_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = blank_as_none(deserializer)?;
    Ok(value.and_then(|v| {
        let v = v.trim();
        let four_digit_year =
            v.len() == 10 && v.as_bytes()[..4].iter().all(u8::is_ascii_digit);
        if !four_digit_year {
            return None;
        }
        NaiveDate::parse_from_str(v, "%Y-%m-%d").ok()
    }))
}
