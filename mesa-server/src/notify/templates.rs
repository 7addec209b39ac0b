//! HTML 邮件模板

use shared::models::{HaccpAlert, Reservation};

/// Escape text interpolated into HTML bodies
fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub const RESERVATION_SUBJECT: &str = "Reserva Confirmada";
pub const HACCP_ALERT_SUBJECT: &str = "Alerta HACCP - Registos Pendentes";

/// Reservation confirmation; the table line appears only when one was assigned
pub fn reservation_confirmation(reservation: &Reservation, table_label: Option<&str>) -> String {
    let table_line = table_label
        .map(|label| format!("<p><strong>Mesa:</strong> {}</p>", escape(label)))
        .unwrap_or_default();

    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
    <h2 style="color: #3b82f6;">Reserva Confirmada</h2>
    <p>Olá {name},</p>
    <p>A sua reserva foi confirmada com sucesso!</p>
    <div style="background: #f8fafc; padding: 20px; border-radius: 8px; margin: 20px 0;">
        <p><strong>Data:</strong> {date}</p>
        <p><strong>Hora:</strong> {time}</p>
        <p><strong>Pessoas:</strong> {guests}</p>
        {table_line}
    </div>
    <p>Aguardamos por si!</p>
</div>"#,
        name = escape(&reservation.name),
        date = reservation.date.format("%Y-%m-%d"),
        time = reservation.time.format("%H:%M"),
        guests = reservation.guests,
    )
}

/// HACCP alert listing every pending warning
pub fn haccp_alert(alerts: &[HaccpAlert]) -> String {
    let items: String = alerts
        .iter()
        .map(|a| format!("<li>{}</li>", escape(&a.message)))
        .collect();

    format!(
        r#"<div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
    <h2 style="color: #f43f5e;">Alerta HACCP</h2>
    <p>Existem registos HACCP pendentes:</p>
    <ul>{items}</ul>
    <p>Por favor, complete os registos em falta.</p>
</div>"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use shared::models::{AlertKind, AlertPriority, MealPeriod, ReservationStatus};

    fn reservation() -> Reservation {
        Reservation {
            reservation_id: "r1".into(),
            name: "Ana <b>".into(),
            phone: "912345678".into(),
            email: Some("ana@example.com".into()),
            guests: 4,
            date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            time: NaiveTime::from_hms_opt(13, 0, 0).unwrap(),
            meal_type: MealPeriod::Lunch,
            table_id: None,
            status: ReservationStatus::Confirmed,
            notes: None,
            created_at: 0,
        }
    }

    #[test]
    fn confirmation_mentions_table_only_when_assigned() {
        let without = reservation_confirmation(&reservation(), None);
        assert!(without.contains("2024-06-10"));
        assert!(without.contains("13:00"));
        assert!(!without.contains("Mesa:"));
        assert!(without.contains("Ana &lt;b&gt;"));

        let with = reservation_confirmation(&reservation(), Some("T4"));
        assert!(with.contains("<strong>Mesa:</strong> T4"));
    }

    #[test]
    fn alert_lists_each_message() {
        let html = haccp_alert(&[
            HaccpAlert {
                kind: AlertKind::Warning,
                message: "first".into(),
                priority: AlertPriority::High,
            },
            HaccpAlert {
                kind: AlertKind::Warning,
                message: "second".into(),
                priority: AlertPriority::Medium,
            },
        ]);
        assert!(html.contains("<li>first</li><li>second</li>"));
    }
}
