use thiserror::Error;
use tracing::info;
use uuid::Uuid;

use crate::application::usecases::{SharedStore, lock};
use crate::domain::{
    entities::schedules::Schedule,
    value_objects::{
        responses::ApiResponse,
        schedules::{CreateScheduleDto, UpdateScheduleDto},
    },
};

const DAY_NAMES: [&str; 7] = [
    "Domingo",
    "Lunes",
    "Martes",
    "Miércoles",
    "Jueves",
    "Viernes",
    "Sábado",
];

#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("Horario no encontrado")]
    ScheduleNotFound,
    #[error("El día de la semana debe estar entre 0 y 6")]
    InvalidDayOfWeek,
    #[error("La capacidad máxima debe ser mayor a 0")]
    InvalidCapacity,
    #[error("Instructor no encontrado")]
    InstructorNotFound,
    #[error("No se pudo eliminar el horario")]
    DeleteFailed,
}

pub type UseCaseResult<T> = Result<T, ScheduleError>;

/// Weekly class grid. Day-of-week is 0-indexed from Sunday, times are
/// "HH:MM" strings the way the grid displays them.
pub struct SchedulesUseCase {
    store: SharedStore,
}

impl SchedulesUseCase {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    pub fn list_schedules(&self) -> Vec<Schedule> {
        lock(&self.store).get_schedules()
    }

    /// Schedules whose class type belongs to the given plan type.
    pub fn schedules_by_plan_type(&self, plan_type_id: Uuid) -> Vec<Schedule> {
        lock(&self.store)
            .get_schedules()
            .into_iter()
            .filter(|schedule| schedule.class_type.id == plan_type_id)
            .collect()
    }

    pub fn get_schedule(&self, id: Uuid) -> Option<Schedule> {
        lock(&self.store).get_schedule_by_id(id)
    }

    pub fn create_schedule(&self, dto: CreateScheduleDto) -> UseCaseResult<ApiResponse<Schedule>> {
        let mut store = lock(&self.store);

        Self::validate(dto.day_of_week, dto.max_capacity)?;
        if store.get_instructor_by_id(dto.instructor_id).is_none() {
            return Err(ScheduleError::InstructorNotFound);
        }

        let schedule = store.add_schedule(dto);
        info!(schedule_id = %schedule.id, "schedules: schedule created");
        Ok(ApiResponse::ok(schedule, "Horario creado exitosamente"))
    }

    pub fn update_schedule(&self, dto: UpdateScheduleDto) -> UseCaseResult<ApiResponse<Schedule>> {
        let mut store = lock(&self.store);

        store
            .get_schedule_by_id(dto.id)
            .ok_or(ScheduleError::ScheduleNotFound)?;

        if let Some(day_of_week) = dto.patch.day_of_week {
            if day_of_week > 6 {
                return Err(ScheduleError::InvalidDayOfWeek);
            }
        }
        if let Some(max_capacity) = dto.patch.max_capacity {
            if max_capacity == 0 {
                return Err(ScheduleError::InvalidCapacity);
            }
        }
        if let Some(instructor_id) = dto.patch.instructor_id {
            if store.get_instructor_by_id(instructor_id).is_none() {
                return Err(ScheduleError::InstructorNotFound);
            }
        }

        let updated = store
            .update_schedule(dto.id, dto.patch)
            .ok_or(ScheduleError::ScheduleNotFound)?;
        info!(schedule_id = %updated.id, "schedules: schedule updated");
        Ok(ApiResponse::ok(updated, "Horario actualizado exitosamente"))
    }

    pub fn delete_schedule(&self, id: Uuid) -> UseCaseResult<ApiResponse<()>> {
        let mut store = lock(&self.store);

        if !store.delete_schedule(id) {
            return Err(ScheduleError::DeleteFailed);
        }

        info!(schedule_id = %id, "schedules: schedule deleted");
        Ok(ApiResponse::message_only("Horario eliminado exitosamente"))
    }

    /// Spanish weekday name for the 0-indexed day, empty when out of range.
    pub fn day_name(&self, day_of_week: u8) -> &'static str {
        DAY_NAMES.get(day_of_week as usize).copied().unwrap_or("")
    }

    /// "{day} {start} - {end} ({room})", as shown in reservation listings.
    pub fn format_schedule_display(&self, schedule: &Schedule) -> String {
        format!(
            "{} {} - {} ({})",
            self.day_name(schedule.day_of_week),
            schedule.start_time,
            schedule.end_time,
            schedule.room
        )
    }

    fn validate(day_of_week: u8, max_capacity: u32) -> UseCaseResult<()> {
        if day_of_week > 6 {
            return Err(ScheduleError::InvalidDayOfWeek);
        }
        if max_capacity == 0 {
            return Err(ScheduleError::InvalidCapacity);
        }
        Ok(())
    }
}
