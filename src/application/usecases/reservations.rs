use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{info, warn};
use uuid::Uuid;

use crate::application::usecases::{SharedStore, lock};
use crate::domain::{
    entities::reservations::Reservation,
    value_objects::{
        enums::reservation_statuses::ReservationStatus,
        reservations::{CreateReservationDto, ReservationPatch, ScheduleAvailability},
        responses::ApiResponse,
    },
};

#[derive(Debug, Error, PartialEq)]
pub enum ReservationError {
    #[error("Alumno no encontrado")]
    StudentNotFound,
    #[error("Horario no encontrado")]
    ScheduleNotFound,
    #[error("No hay cupos disponibles para este horario")]
    NoSlotsAvailable,
    #[error("Reserva no encontrada")]
    ReservationNotFound,
    #[error("La reserva ya está cancelada")]
    AlreadyCancelled,
}

pub type UseCaseResult<T> = Result<T, ReservationError>;

/// Class bookings against the weekly schedule grid. Capacity is enforced
/// per schedule occurrence: only `Scheduled` reservations on the same
/// calendar day count against `max_capacity`.
pub struct ReservationsUseCase {
    store: SharedStore,
}

impl ReservationsUseCase {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn check_availability(&self, schedule_id: Uuid, date: DateTime<Utc>) -> bool {
        lock(&self.store).check_availability(schedule_id, date)
    }

    pub fn schedule_availability(
        &self,
        schedule_id: Uuid,
        date: DateTime<Utc>,
    ) -> UseCaseResult<ScheduleAvailability> {
        let store = lock(&self.store);
        let schedule = store
            .get_schedule_by_id(schedule_id)
            .ok_or(ReservationError::ScheduleNotFound)?;

        let taken = store.scheduled_count(schedule_id, date) as u32;
        Ok(ScheduleAvailability {
            schedule_id,
            date,
            available_slots: schedule.max_capacity.saturating_sub(taken),
            max_capacity: schedule.max_capacity,
            is_available: taken < schedule.max_capacity,
        })
    }

    /// Books a slot. Capacity is checked under the same lock that inserts
    /// the reservation, so two bookings for the last slot cannot both
    /// succeed.
    pub fn create_reservation(
        &self,
        dto: CreateReservationDto,
    ) -> UseCaseResult<ApiResponse<Reservation>> {
        let mut store = lock(&self.store);

        if store.get_student_by_id(dto.student_id).is_none() {
            return Err(ReservationError::StudentNotFound);
        }
        if store.get_schedule_by_id(dto.schedule_id).is_none() {
            return Err(ReservationError::ScheduleNotFound);
        }
        if !store.check_availability(dto.schedule_id, dto.date) {
            warn!(
                schedule_id = %dto.schedule_id,
                date = %dto.date,
                "reservations: booking refused, occurrence is full"
            );
            return Err(ReservationError::NoSlotsAvailable);
        }

        let reservation = store.add_reservation(dto);
        info!(
            reservation_id = %reservation.id,
            student_id = %reservation.student_id,
            "reservations: reservation created"
        );
        Ok(ApiResponse::ok(reservation, "Reserva creada exitosamente"))
    }

    /// Cancelling frees the slot for that occurrence; the reservation row
    /// is kept with its cancellation timestamp.
    pub fn cancel_reservation(&self, id: Uuid) -> UseCaseResult<ApiResponse<Reservation>> {
        let mut store = lock(&self.store);

        let existing = store
            .get_reservation_by_id(id)
            .ok_or(ReservationError::ReservationNotFound)?;
        if existing.status == ReservationStatus::Cancelled {
            return Err(ReservationError::AlreadyCancelled);
        }

        let cancelled = store
            .update_reservation(
                id,
                ReservationPatch {
                    status: Some(ReservationStatus::Cancelled),
                    cancellation_date: Some(Utc::now()),
                    ..Default::default()
                },
            )
            .ok_or(ReservationError::ReservationNotFound)?;

        info!(reservation_id = %id, "reservations: reservation cancelled");
        Ok(ApiResponse::ok(cancelled, "Reserva cancelada exitosamente"))
    }

    pub fn student_reservations(&self, student_id: Uuid) -> Vec<Reservation> {
        lock(&self.store)
            .get_reservations()
            .into_iter()
            .filter(|reservation| reservation.student_id == student_id)
            .collect()
    }

    /// `Scheduled` reservations strictly after now.
    pub fn student_future_reservations(&self, student_id: Uuid) -> Vec<Reservation> {
        lock(&self.store).student_future_reservations(student_id)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::NaiveDate;

    use super::*;
    use crate::datastore::DataStore;
    use crate::infrastructure::storage::snapshot::MemorySnapshotStore;

    fn usecase() -> ReservationsUseCase {
        let store = DataStore::new(Box::new(MemorySnapshotStore::default()));
        ReservationsUseCase::new(Arc::new(Mutex::new(store)))
    }

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        NaiveDate::from_ymd_opt(year, month, day)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
            .and_utc()
    }

    #[test]
    fn booking_the_last_slot_flips_availability_until_cancelled() {
        let reservations = usecase();
        let (slot, students) = {
            let store = lock(&reservations.store);
            (
                store
                    .get_schedules()
                    .into_iter()
                    .find(|s| s.max_capacity == 1)
                    .unwrap(),
                store.get_students(),
            )
        };
        let date = at(2024, 8, 7);

        assert!(reservations.check_availability(slot.id, date));

        let booked = reservations
            .create_reservation(CreateReservationDto {
                student_id: students[0].id,
                schedule_id: slot.id,
                date,
            })
            .unwrap()
            .data
            .unwrap();
        assert_eq!(booked.status, ReservationStatus::Scheduled);
        assert!(!reservations.check_availability(slot.id, date));

        // a second booking for the same occurrence is refused
        assert_eq!(
            reservations
                .create_reservation(CreateReservationDto {
                    student_id: students[1].id,
                    schedule_id: slot.id,
                    date,
                })
                .unwrap_err(),
            ReservationError::NoSlotsAvailable
        );

        let cancelled = reservations.cancel_reservation(booked.id).unwrap().data.unwrap();
        assert_eq!(cancelled.status, ReservationStatus::Cancelled);
        assert!(cancelled.cancellation_date.is_some());
        assert!(reservations.check_availability(slot.id, date));
    }

    #[test]
    fn availability_summary_counts_taken_slots() {
        let reservations = usecase();
        let (slot, ana) = {
            let store = lock(&reservations.store);
            (store.get_schedules()[0].clone(), store.get_students()[0].clone())
        };
        let date = at(2024, 8, 5);

        let before = reservations.schedule_availability(slot.id, date).unwrap();
        assert_eq!(before.available_slots, slot.max_capacity);
        assert!(before.is_available);

        reservations
            .create_reservation(CreateReservationDto {
                student_id: ana.id,
                schedule_id: slot.id,
                date,
            })
            .unwrap();

        let after = reservations.schedule_availability(slot.id, date).unwrap();
        assert_eq!(after.available_slots, slot.max_capacity - 1);
        assert_eq!(after.max_capacity, slot.max_capacity);
    }

    #[test]
    fn availability_summary_for_unknown_schedule_is_an_error() {
        let reservations = usecase();
        assert_eq!(
            reservations
                .schedule_availability(Uuid::new_v4(), Utc::now())
                .unwrap_err(),
            ReservationError::ScheduleNotFound
        );
    }

    #[test]
    fn booking_requires_known_student_and_schedule() {
        let reservations = usecase();
        let (slot, ana) = {
            let store = lock(&reservations.store);
            (store.get_schedules()[0].clone(), store.get_students()[0].clone())
        };

        assert_eq!(
            reservations
                .create_reservation(CreateReservationDto {
                    student_id: Uuid::new_v4(),
                    schedule_id: slot.id,
                    date: at(2024, 8, 5),
                })
                .unwrap_err(),
            ReservationError::StudentNotFound
        );
        assert_eq!(
            reservations
                .create_reservation(CreateReservationDto {
                    student_id: ana.id,
                    schedule_id: Uuid::new_v4(),
                    date: at(2024, 8, 5),
                })
                .unwrap_err(),
            ReservationError::ScheduleNotFound
        );
    }

    #[test]
    fn cancelling_twice_is_refused() {
        let reservations = usecase();
        let existing = lock(&reservations.store).get_reservations()[0].id;

        reservations.cancel_reservation(existing).unwrap();
        assert_eq!(
            reservations.cancel_reservation(existing).unwrap_err(),
            ReservationError::AlreadyCancelled
        );
        assert_eq!(
            reservations.cancel_reservation(Uuid::new_v4()).unwrap_err(),
            ReservationError::ReservationNotFound
        );
    }

    #[test]
    fn future_reservations_exclude_past_and_cancelled_ones() {
        let reservations = usecase();
        let (slot, ana) = {
            let store = lock(&reservations.store);
            (store.get_schedules()[0].clone(), store.get_students()[0].clone())
        };

        let upcoming = reservations
            .create_reservation(CreateReservationDto {
                student_id: ana.id,
                schedule_id: slot.id,
                date: Utc::now() + chrono::Duration::days(3),
            })
            .unwrap()
            .data
            .unwrap();
        let cancelled = reservations
            .create_reservation(CreateReservationDto {
                student_id: ana.id,
                schedule_id: slot.id,
                date: Utc::now() + chrono::Duration::days(10),
            })
            .unwrap()
            .data
            .unwrap();
        reservations.cancel_reservation(cancelled.id).unwrap();

        let future = reservations.student_future_reservations(ana.id);
        assert_eq!(future.len(), 1);
        assert_eq!(future[0].id, upcoming.id);

        // the seed reservation from July 2024 is in the past
        assert!(reservations
            .student_reservations(ana.id)
            .iter()
            .any(|r| r.date < Utc::now()));
    }
}
