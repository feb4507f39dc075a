use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::application::usecases::{SharedStore, lock};
use crate::domain::{
    entities::notifications::Notification,
    value_objects::{
        notifications::{CreateNotificationDto, NotificationPatch},
        responses::ApiResponse,
    },
};

#[derive(Debug, Error, PartialEq)]
pub enum NotificationError {
    #[error("Notificación no encontrada")]
    NotificationNotFound,
}

pub type UseCaseResult<T> = Result<T, NotificationError>;

pub struct NotificationsUseCase {
    store: SharedStore,
}

impl NotificationsUseCase {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn student_notifications(&self, student_id: Uuid) -> Vec<Notification> {
        lock(&self.store)
            .get_notifications()
            .into_iter()
            .filter(|notification| notification.student_id == student_id)
            .collect()
    }

    pub fn unread_count(&self, student_id: Uuid) -> usize {
        lock(&self.store)
            .get_notifications()
            .iter()
            .filter(|notification| notification.student_id == student_id && !notification.read)
            .count()
    }

    pub fn mark_read(&self, id: Uuid) -> UseCaseResult<ApiResponse<Notification>> {
        let mut store = lock(&self.store);

        let updated = store
            .update_notification(id, NotificationPatch { read: Some(true) })
            .ok_or(NotificationError::NotificationNotFound)?;

        info!(notification_id = %id, "notifications: marked read");
        Ok(ApiResponse::ok(updated, "Notificación marcada como leída"))
    }

    pub fn create_notification(&self, dto: CreateNotificationDto) -> Notification {
        let mut store = lock(&self.store);
        let notification = store.add_notification(dto);
        info!(
            notification_id = %notification.id,
            student_id = %notification.student_id,
            "notifications: notification created"
        );
        notification
    }
}
