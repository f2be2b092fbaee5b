//! OpenAPI schema aggregation for the registry API.
//!
//! # Purpose
//! Collects all routes and schema types into a single OpenAPI document served
//! at `/api/openapi.json` and rendered under `/docs`.
use crate::api::{
    animals, cares, system,
    types::{ErrorResponse, HealthStatus, MessageResponse, ServiceInfo},
};
use crate::model::{Animal, AnimalPatch, Cuidado, CuidadoPatch, Frequencia, NewAnimal, NewCuidado};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "zoo-registry",
        version = "v1",
        description = "Animal and care routine registry HTTP API"
    ),
    paths(
        system::system_info,
        system::system_health,
        animals::list_animals,
        animals::create_animal,
        animals::get_animal,
        animals::update_animal,
        animals::delete_animal,
        cares::list_cares,
        cares::create_care,
        cares::get_care,
        cares::update_care,
        cares::delete_care
    ),
    components(schemas(
        ErrorResponse,
        MessageResponse,
        HealthStatus,
        ServiceInfo,
        Animal,
        NewAnimal,
        AnimalPatch,
        Cuidado,
        NewCuidado,
        CuidadoPatch,
        Frequencia
    )),
    tags(
        (name = "system", description = "System and discovery endpoints"),
        (name = "animais", description = "Animal management"),
        (name = "cuidados", description = "Care routine management")
    )
)]
pub struct ApiDoc;
