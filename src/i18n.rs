use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::models::Field;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    Ar,
    En,
}

impl Locale {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "ar" => Some(Locale::Ar),
            "en" => Some(Locale::En),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Ar => "ar",
            Locale::En => "en",
        }
    }

    pub fn dir(&self) -> &'static str {
        match self {
            Locale::Ar => "rtl",
            Locale::En => "ltr",
        }
    }

    /// First column of the calendar grid.
    pub fn week_start(&self) -> Weekday {
        match self {
            Locale::Ar => Weekday::Sat,
            Locale::En => Weekday::Sun,
        }
    }

    pub fn catalog(&self) -> &'static Catalog {
        match self {
            Locale::Ar => &AR,
            Locale::En => &EN,
        }
    }

    /// `d MMMM yyyy` with the month spelled out.
    pub fn format_date(&self, date: NaiveDate) -> String {
        let month = self.catalog().months[date.month0() as usize];
        format!("{} {month} {}", date.day(), date.year())
    }

    pub fn weekday_name(&self, day: Weekday) -> &'static str {
        self.catalog().weekdays[day.num_days_from_monday() as usize]
    }
}

pub struct FieldText {
    pub label: &'static str,
    pub placeholder: &'static str,
    pub invalid: &'static str,
}

pub struct Catalog {
    pub booking_title: &'static str,
    pub booking_subtitle: &'static str,
    pub name: FieldText,
    pub email: FieldText,
    pub phone: FieldText,
    pub organization: FieldText,
    pub visit_reason: FieldText,
    pub message: FieldText,
    pub appointment_details: &'static str,
    pub date_label: &'static str,
    pub date_placeholder: &'static str,
    pub date_required: &'static str,
    pub date_unavailable: &'static str,
    pub time_label: &'static str,
    pub time_required: &'static str,
    pub previous_month: &'static str,
    pub next_month: &'static str,
    pub submit: &'static str,
    pub submitted: &'static str,
    pub showcase_eyebrow: &'static str,
    pub showcase_title: &'static str,
    pub book_visit: &'static str,
    /// Indexed from January.
    pub months: [&'static str; 12],
    /// Indexed from Monday.
    pub weekdays: [&'static str; 7],
}

impl Catalog {
    pub fn field(&self, field: Field) -> Option<&FieldText> {
        match field {
            Field::Name => Some(&self.name),
            Field::Email => Some(&self.email),
            Field::Phone => Some(&self.phone),
            Field::Organization => Some(&self.organization),
            Field::VisitReason => Some(&self.visit_reason),
            Field::Message => Some(&self.message),
            Field::AppointmentDate | Field::AppointmentTime => None,
        }
    }
}

static AR: Catalog = Catalog {
    booking_title: "حجز موعد زيارة",
    booking_subtitle: "يرجى تعبئة النموذج أدناه لحجز موعد زيارتك",
    name: FieldText {
        label: "الاسم الكامل",
        placeholder: "أدخل اسمك الكامل",
        invalid: "الاسم يجب أن يكون حرفين على الأقل",
    },
    email: FieldText {
        label: "البريد الإلكتروني",
        placeholder: "example@email.com",
        invalid: "البريد الإلكتروني غير صحيح",
    },
    phone: FieldText {
        label: "رقم الجوال",
        placeholder: "05xxxxxxxx",
        invalid: "رقم الجوال يجب أن يكون 10 أرقام على الأقل",
    },
    organization: FieldText {
        label: "اسم الجهة",
        placeholder: "أدخل اسم الجهة",
        invalid: "اسم الجهة مطلوب",
    },
    visit_reason: FieldText {
        label: "سبب الزيارة",
        placeholder: "أدخل سبب الزيارة",
        invalid: "سبب الزيارة مطلوب",
    },
    message: FieldText {
        label: "نص الرسالة",
        placeholder: "أدخل تفاصيل إضافية عن موضوع الزيارة...",
        invalid: "الرسالة يجب أن تكون 10 أحرف على الأقل",
    },
    appointment_details: "تفاصيل الموعد",
    date_label: "موعد الزيارة",
    date_placeholder: "اختر التاريخ",
    date_required: "يرجى اختيار موعد الزيارة",
    date_unavailable: "هذا التاريخ غير متاح للحجز",
    time_label: "وقت الزيارة",
    time_required: "يرجى اختيار وقت الزيارة",
    previous_month: "الشهر السابق",
    next_month: "الشهر التالي",
    submit: "إرسال طلب الحجز",
    submitted: "تم إرسال طلب الحجز بنجاح!",
    showcase_eyebrow: "شخصية المجلس",
    showcase_title: "شخصية المجلس",
    book_visit: "احجز موعد زيارة",
    months: [
        "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو",
        "يوليو", "أغسطس", "سبتمبر", "أكتوبر", "نوفمبر", "ديسمبر",
    ],
    weekdays: [
        "الاثنين", "الثلاثاء", "الأربعاء", "الخميس", "الجمعة", "السبت", "الأحد",
    ],
};

static EN: Catalog = Catalog {
    booking_title: "Book a visit",
    booking_subtitle: "Please fill in the form below to book your visit",
    name: FieldText {
        label: "Full name",
        placeholder: "Enter your full name",
        invalid: "Name must be at least 2 characters",
    },
    email: FieldText {
        label: "Email",
        placeholder: "example@email.com",
        invalid: "Invalid email address",
    },
    phone: FieldText {
        label: "Mobile number",
        placeholder: "05xxxxxxxx",
        invalid: "Mobile number must be at least 10 digits",
    },
    organization: FieldText {
        label: "Organization",
        placeholder: "Enter the organization name",
        invalid: "Organization name is required",
    },
    visit_reason: FieldText {
        label: "Reason for visit",
        placeholder: "Enter the reason for your visit",
        invalid: "Reason for visit is required",
    },
    message: FieldText {
        label: "Message",
        placeholder: "Add any further details about the visit...",
        invalid: "Message must be at least 10 characters",
    },
    appointment_details: "Appointment details",
    date_label: "Visit date",
    date_placeholder: "Pick a date",
    date_required: "Please choose a visit date",
    date_unavailable: "This date cannot be booked",
    time_label: "Visit time",
    time_required: "Please choose a visit time",
    previous_month: "Previous month",
    next_month: "Next month",
    submit: "Send booking request",
    submitted: "Your booking request was sent!",
    showcase_eyebrow: "Council character",
    showcase_title: "Council character",
    book_visit: "Book a visit",
    months: [
        "January", "February", "March", "April", "May", "June",
        "July", "August", "September", "October", "November", "December",
    ],
    weekdays: [
        "Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun",
    ],
};
