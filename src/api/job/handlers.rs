use actix_web::{
    get, post,
    web::{Data, ServiceConfig},
    HttpResponse, Responder,
};
use async_graphql::http::GraphiQLSource;
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};

use super::schema::JobBoardSchema;

/// Path the GraphQL endpoint is mounted on
pub const GRAPHQL_PATH: &str = "/query";

#[post("/query")]
async fn graphql(schema: Data<JobBoardSchema>, request: GraphQLRequest) -> GraphQLResponse {
    schema.execute(request.into_inner()).await.into()
}

/// Interactive GraphiQL page pointed at the endpoint
#[get("/")]
async fn graphiql() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}

pub fn graphql_config(config: &mut ServiceConfig) {
    config.service(graphql).service(graphiql);
}
