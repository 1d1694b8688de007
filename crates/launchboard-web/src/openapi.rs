//! OpenAPI documentation definition.

use launchboard_core::api::figures::{
    PieFigure, PieSlice, ScatterFigure, ScatterPoint, ScatterSeries,
};
use launchboard_core::api::schema::{
    ControlsSchema, DashboardSchema, DatasetInfo, DropdownOption, DropdownSchema, InstanceInfo,
    SliderMark, SliderSchema,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::handle_health,
        crate::handlers::handle_schema,
        crate::handlers::handle_success_pie,
        crate::handlers::handle_payload_scatter,
    ),
    components(schemas(
        DashboardSchema,
        DatasetInfo,
        InstanceInfo,
        ControlsSchema,
        DropdownSchema,
        DropdownOption,
        SliderSchema,
        SliderMark,
        PieFigure,
        PieSlice,
        ScatterFigure,
        ScatterSeries,
        ScatterPoint,
    )),
    info(
        title = "launchboard API",
        version = "1.0",
        description = "Launch records dashboard API — dataset schema and reactive chart figures"
    )
)]
pub(crate) struct ApiDoc;
