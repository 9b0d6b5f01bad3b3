//! People who receive the SMS digest.

use serde::{Deserialize, Serialize};

use super::PhoneNumber;
use crate::domain::cosmic::CalendarDate;
use crate::domain::foundation::UserId;

/// A user opted in to the SMS digest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmsSubscriber {
    pub user_id: UserId,
    #[serde(default)]
    pub name: Option<String>,
    pub phone: PhoneNumber,
    pub birth_date: CalendarDate,
}

impl SmsSubscriber {
    pub fn new(
        user_id: UserId,
        name: Option<String>,
        phone: PhoneNumber,
        birth_date: CalendarDate,
    ) -> Self {
        Self {
            user_id,
            name,
            phone,
            birth_date,
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}
