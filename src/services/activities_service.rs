use thiserror::Error;
use tracing::{info, warn};

use crate::database::activity_store::ActivityStore;
use crate::models::ActivityTable;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActivityError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("Student already signed up for this activity")]
    AlreadySignedUp,

    #[error("Activity is full")]
    ActivityFull,

    #[error("Participant not found in this activity")]
    ParticipantNotFound,
}

impl ActivityError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ActivityError::ActivityNotFound | ActivityError::ParticipantNotFound
        )
    }

    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            ActivityError::AlreadySignedUp | ActivityError::ActivityFull
        )
    }
}

pub async fn list_activities(store: &ActivityStore) -> ActivityTable {
    store.snapshot().await
}

// Appends `email` to the activity's roster.
// Checked in order: the activity exists, the email is not enrolled yet, there
// is a free spot. On any failure the roster is left as it was.
pub async fn signup(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    let result = store
        .update(|table: &mut ActivityTable| -> Result<usize, ActivityError> {
            let activity = table
                .get_mut(activity_name)
                .ok_or(ActivityError::ActivityNotFound)?;
            if activity.has_participant(email) {
                return Err(ActivityError::AlreadySignedUp);
            }
            if activity.is_full() {
                return Err(ActivityError::ActivityFull);
            }
            activity.participants.push(email.to_string());
            Ok(activity.spots_left())
        })
        .await;

    match result {
        Ok(spots_left) => {
            info!(activity = %activity_name, %email, spots_left, "signup accepted");
            Ok(format!("Signed up {} for {}", email, activity_name))
        }
        Err(e) => {
            warn!(activity = %activity_name, %email, reason = %e, "signup rejected");
            Err(e)
        }
    }
}

pub async fn unregister(
    store: &ActivityStore,
    activity_name: &str,
    email: &str,
) -> Result<String, ActivityError> {
    let result = store
        .update(|table: &mut ActivityTable| -> Result<usize, ActivityError> {
            let activity = table
                .get_mut(activity_name)
                .ok_or(ActivityError::ActivityNotFound)?;
            let Some(pos) = activity.participants.iter().position(|p| p == email) else {
                return Err(ActivityError::ParticipantNotFound);
            };
            activity.participants.remove(pos);
            Ok(activity.participants.len())
        })
        .await;

    match result {
        Ok(count) => {
            info!(activity = %activity_name, %email, participants = count, "unregister accepted");
            Ok(format!("Unregistered {} from {}", email, activity_name))
        }
        Err(e) => {
            warn!(activity = %activity_name, %email, reason = %e, "unregister rejected");
            Err(e)
        }
    }
}
