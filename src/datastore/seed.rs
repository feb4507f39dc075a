use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::{
    entities::{
        instructors::Instructor,
        notifications::Notification,
        plans::{Plan, PlanType, UNLIMITED_CLASSES},
        reservations::Reservation,
        schedules::Schedule,
        student_plans::StudentPlan,
        students::Student,
        users::User,
    },
    value_objects::{
        auth::MockCredential,
        enums::{
            instructor_statuses::InstructorStatus, notification_types::NotificationType,
            plan_formats::PlanFormat, plan_statuses::PlanStatus,
            reservation_statuses::ReservationStatus,
            student_plan_statuses::StudentPlanStatus, student_statuses::StudentStatus,
            user_roles::UserRole,
        },
    },
};

pub(crate) struct SeedData {
    pub plans: Vec<Plan>,
    pub plan_types: Vec<PlanType>,
    pub schedules: Vec<Schedule>,
    pub students: Vec<Student>,
    pub instructors: Vec<Instructor>,
    pub student_plans: Vec<StudentPlan>,
    pub reservations: Vec<Reservation>,
    pub notifications: Vec<Notification>,
    pub users: Vec<User>,
    pub passwords: HashMap<UserRole, String>,
    pub credentials: Vec<MockCredential>,
}

fn day(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .expect("seed date literal")
        .and_utc()
}

fn birth(year: i32, month: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, d).expect("seed date literal")
}

/// Built-in dataset the store starts from when no snapshot exists.
pub(crate) fn seed() -> SeedData {
    let crossfit = PlanType {
        id: Uuid::new_v4(),
        name: "CROSSFIT".to_string(),
        format: PlanFormat::InPerson,
    };
    let zumba = PlanType {
        id: Uuid::new_v4(),
        name: "ZUMBA".to_string(),
        format: PlanFormat::InPerson,
    };
    let personalizado = PlanType {
        id: Uuid::new_v4(),
        name: "PERSONALIZADO".to_string(),
        format: PlanFormat::InPerson,
    };
    let yoga_online = PlanType {
        id: Uuid::new_v4(),
        name: "YOGA_ONLINE".to_string(),
        format: PlanFormat::Online,
    };

    let carlos = Instructor {
        id: Uuid::new_v4(),
        name: "Carlos".to_string(),
        last_name: "Rodriguez".to_string(),
        email: "carlos@boxtraining.com".to_string(),
        phone: "+56912345678".to_string(),
        specialties: vec![
            "CrossFit".to_string(),
            "Entrenamiento Funcional".to_string(),
        ],
        biography: "Instructor certificado con 5 años de experiencia en CrossFit".to_string(),
        photo: Some("assets/images/instructors/carlos.jpg".to_string()),
        status: InstructorStatus::Active,
    };
    let maria = Instructor {
        id: Uuid::new_v4(),
        name: "Maria".to_string(),
        last_name: "Gonzalez".to_string(),
        email: "maria@boxtraining.com".to_string(),
        phone: "+56912345679".to_string(),
        specialties: vec![
            "Zumba".to_string(),
            "Baile".to_string(),
            "Cardio".to_string(),
        ],
        biography: "Instructora de Zumba con certificación internacional".to_string(),
        photo: Some("assets/images/instructors/maria.jpg".to_string()),
        status: InstructorStatus::Active,
    };
    let juan = Instructor {
        id: Uuid::new_v4(),
        name: "Juan".to_string(),
        last_name: "Perez".to_string(),
        email: "juan@boxtraining.com".to_string(),
        phone: "+56912345680".to_string(),
        specialties: vec![
            "Entrenamiento Personalizado".to_string(),
            "Fuerza".to_string(),
        ],
        biography: "Personal trainer especializado en entrenamiento de fuerza".to_string(),
        photo: Some("assets/images/instructors/juan.jpg".to_string()),
        status: InstructorStatus::Active,
    };

    let schedules = vec![
        Schedule {
            id: Uuid::new_v4(),
            day_of_week: 1,
            start_time: "07:00".to_string(),
            end_time: "08:00".to_string(),
            max_capacity: 15,
            instructor_id: carlos.id,
            class_type: crossfit.clone(),
            room: "Sala Principal".to_string(),
            description: "CrossFit matutino - Nivel intermedio".to_string(),
        },
        Schedule {
            id: Uuid::new_v4(),
            day_of_week: 1,
            start_time: "18:00".to_string(),
            end_time: "19:00".to_string(),
            max_capacity: 20,
            instructor_id: carlos.id,
            class_type: crossfit.clone(),
            room: "Sala Principal".to_string(),
            description: "CrossFit vespertino - Todos los niveles".to_string(),
        },
        Schedule {
            id: Uuid::new_v4(),
            day_of_week: 2,
            start_time: "19:00".to_string(),
            end_time: "20:00".to_string(),
            max_capacity: 25,
            instructor_id: maria.id,
            class_type: zumba.clone(),
            room: "Sala de Baile".to_string(),
            description: "Zumba fitness - Todos los niveles".to_string(),
        },
        Schedule {
            id: Uuid::new_v4(),
            day_of_week: 4,
            start_time: "19:00".to_string(),
            end_time: "20:00".to_string(),
            max_capacity: 25,
            instructor_id: maria.id,
            class_type: zumba.clone(),
            room: "Sala de Baile".to_string(),
            description: "Zumba fitness - Todos los niveles".to_string(),
        },
        Schedule {
            id: Uuid::new_v4(),
            day_of_week: 3,
            start_time: "09:00".to_string(),
            end_time: "10:00".to_string(),
            max_capacity: 1,
            instructor_id: juan.id,
            class_type: personalizado.clone(),
            room: "Sala Privada".to_string(),
            description: "Entrenamiento personalizado".to_string(),
        },
        Schedule {
            id: Uuid::new_v4(),
            day_of_week: 5,
            start_time: "16:00".to_string(),
            end_time: "17:00".to_string(),
            max_capacity: 1,
            instructor_id: juan.id,
            class_type: personalizado.clone(),
            room: "Sala Privada".to_string(),
            description: "Entrenamiento personalizado".to_string(),
        },
    ];

    let created = day(2024, 1, 1);
    let plan_crossfit_basico = Plan {
        id: Uuid::new_v4(),
        name: "Plan CrossFit Básico".to_string(),
        plan_types: vec![crossfit.clone()],
        description: "Plan para principiantes en CrossFit con 8 clases mensuales".to_string(),
        duration_days: 30,
        included_classes: 8,
        price: 45000,
        status: PlanStatus::Active,
        creation_date: created,
        last_modified_date: created,
        documents: None,
        images: None,
    };
    let plan_crossfit_ilimitado = Plan {
        id: Uuid::new_v4(),
        name: "Plan CrossFit Ilimitado".to_string(),
        plan_types: vec![crossfit.clone()],
        description: "Plan ilimitado de CrossFit para usuarios avanzados".to_string(),
        duration_days: 30,
        included_classes: UNLIMITED_CLASSES,
        price: 75000,
        status: PlanStatus::Active,
        creation_date: created,
        last_modified_date: created,
        documents: None,
        images: None,
    };
    let plan_zumba = Plan {
        id: Uuid::new_v4(),
        name: "Plan Zumba Mensual".to_string(),
        plan_types: vec![zumba.clone()],
        description: "Plan mensual de Zumba con clases ilimitadas".to_string(),
        duration_days: 30,
        included_classes: UNLIMITED_CLASSES,
        price: 35000,
        status: PlanStatus::Active,
        creation_date: created,
        last_modified_date: created,
        documents: None,
        images: None,
    };
    let plan_personal = Plan {
        id: Uuid::new_v4(),
        name: "Entrenamiento Personal".to_string(),
        plan_types: vec![personalizado.clone()],
        description: "Sesiones de entrenamiento personalizado 1 a 1".to_string(),
        duration_days: 30,
        included_classes: 4,
        price: 120000,
        status: PlanStatus::Active,
        creation_date: created,
        last_modified_date: created,
        documents: None,
        images: None,
    };

    let ana = Student {
        id: Uuid::new_v4(),
        first_name: "Ana".to_string(),
        last_name: "Silva".to_string(),
        email: "ana.silva@email.com".to_string(),
        phone: "+56987654321".to_string(),
        birth_date: birth(1990, 5, 15),
        registration_date: day(2024, 1, 15),
        status: StudentStatus::Active,
    };
    let luis = Student {
        id: Uuid::new_v4(),
        first_name: "Luis".to_string(),
        last_name: "Martinez".to_string(),
        email: "luis.martinez@email.com".to_string(),
        phone: "+56987654322".to_string(),
        birth_date: birth(1985, 8, 22),
        registration_date: day(2024, 2, 1),
        status: StudentStatus::Active,
    };
    let carmen = Student {
        id: Uuid::new_v4(),
        first_name: "Carmen".to_string(),
        last_name: "Lopez".to_string(),
        email: "carmen.lopez@email.com".to_string(),
        phone: "+56987654323".to_string(),
        birth_date: birth(1992, 12, 10),
        registration_date: day(2024, 1, 20),
        status: StudentStatus::Active,
    };

    let student_plans = vec![
        StudentPlan {
            id: Uuid::new_v4(),
            student_id: ana.id,
            plan_id: plan_crossfit_basico.id,
            start_date: day(2024, 7, 1),
            end_date: day(2024, 7, 31),
            remaining_classes: 5,
            status: StudentPlanStatus::Active,
            reason_cancellation: None,
            frozen_periods: None,
        },
        StudentPlan {
            id: Uuid::new_v4(),
            student_id: luis.id,
            plan_id: plan_zumba.id,
            start_date: day(2024, 7, 1),
            end_date: day(2024, 7, 31),
            remaining_classes: UNLIMITED_CLASSES,
            status: StudentPlanStatus::Active,
            reason_cancellation: None,
            frozen_periods: None,
        },
        StudentPlan {
            id: Uuid::new_v4(),
            student_id: carmen.id,
            plan_id: plan_personal.id,
            start_date: day(2024, 7, 1),
            end_date: day(2024, 7, 31),
            remaining_classes: 2,
            status: StudentPlanStatus::Active,
            reason_cancellation: None,
            frozen_periods: None,
        },
    ];

    let reservations = vec![
        Reservation {
            id: Uuid::new_v4(),
            student_id: ana.id,
            schedule_id: schedules[0].id,
            date: day(2024, 7, 29),
            status: ReservationStatus::Scheduled,
            reservation_date: day(2024, 7, 27),
            cancellation_date: None,
        },
        Reservation {
            id: Uuid::new_v4(),
            student_id: luis.id,
            schedule_id: schedules[2].id,
            date: day(2024, 7, 30),
            status: ReservationStatus::Scheduled,
            reservation_date: day(2024, 7, 27),
            cancellation_date: None,
        },
    ];

    let notifications = vec![
        Notification {
            id: Uuid::new_v4(),
            student_id: ana.id,
            notification_type: NotificationType::Reminder,
            title: "Clase mañana".to_string(),
            message: "Tienes una clase de CrossFit programada para mañana a las 07:00".to_string(),
            creation_date: Utc::now(),
            sending_date: None,
            read: false,
            action_required: Some(false),
            data: None,
        },
        Notification {
            id: Uuid::new_v4(),
            student_id: carmen.id,
            notification_type: NotificationType::PlanExpiration,
            title: "Plan próximo a vencer".to_string(),
            message: "Tu plan de entrenamiento personal vence en 4 días".to_string(),
            creation_date: Utc::now(),
            sending_date: None,
            read: false,
            action_required: Some(true),
            data: None,
        },
    ];

    let users = vec![
        User {
            id: Uuid::new_v4(),
            email: "admin@boxtraining.com".to_string(),
            name: "Administrador".to_string(),
            last_name: "Sistema".to_string(),
            role: UserRole::Administrator,
            token: None,
            last_access: None,
        },
        // Student logins share the student record's id
        User {
            id: ana.id,
            email: ana.email.clone(),
            name: ana.first_name.clone(),
            last_name: ana.last_name.clone(),
            role: UserRole::Student,
            token: None,
            last_access: None,
        },
        User {
            id: luis.id,
            email: luis.email.clone(),
            name: luis.first_name.clone(),
            last_name: luis.last_name.clone(),
            role: UserRole::Student,
            token: None,
            last_access: None,
        },
        User {
            id: Uuid::new_v4(),
            email: "guillermo.morales@gmail.com".to_string(),
            name: "Guillermo".to_string(),
            last_name: "Morales".to_string(),
            role: UserRole::Instructor,
            token: None,
            last_access: None,
        },
    ];

    let passwords = HashMap::from([
        (UserRole::Administrator, "admin123".to_string()),
        (UserRole::Student, "student123".to_string()),
        (UserRole::Instructor, "instructor123".to_string()),
    ]);

    let credentials = vec![
        MockCredential {
            email: "admin@boxtraining.com".to_string(),
            password: "admin123".to_string(),
            role: "Administrador".to_string(),
        },
        MockCredential {
            email: "ana.silva@email.com".to_string(),
            password: "student123".to_string(),
            role: "Alumno".to_string(),
        },
        MockCredential {
            email: "luis.martinez@email.com".to_string(),
            password: "student123".to_string(),
            role: "Alumno".to_string(),
        },
        MockCredential {
            email: "guillermo.morales@gmail.com".to_string(),
            password: "instructor123".to_string(),
            role: "Instructor".to_string(),
        },
    ];

    SeedData {
        plans: vec![
            plan_crossfit_basico,
            plan_crossfit_ilimitado,
            plan_zumba,
            plan_personal,
        ],
        plan_types: vec![crossfit, zumba, personalizado, yoga_online],
        schedules,
        students: vec![ana, luis, carmen],
        instructors: vec![carlos, maria, juan],
        student_plans,
        reservations,
        notifications,
        users,
        passwords,
        credentials,
    }
}
