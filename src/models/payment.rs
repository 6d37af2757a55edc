use chrono::NaiveDate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentStatus {
    Paid,
    Pending,
}

impl PaymentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentStatus::Paid => "Pagado",
            PaymentStatus::Pending => "Pendiente",
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, PaymentStatus::Pending)
    }
}

/// A monthly membership fee.
#[derive(Debug, Clone, PartialEq)]
pub struct Payment {
    pub id: i64,
    pub month: String,
    /// Amount in Colombian pesos.
    pub amount: u32,
    pub status: PaymentStatus,
    pub due_date: NaiveDate,
}

impl Payment {
    pub fn amount_display(&self) -> String {
        format_cop(self.amount)
    }

    pub fn due_date_display(&self) -> String {
        self.due_date.format("%Y-%m-%d").to_string()
    }
}

/// Format a peso amount with `.` as thousands separator: 50000 -> "$50.000".
pub fn format_cop(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    out.push('$');
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}
