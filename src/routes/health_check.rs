use actix_web::HttpResponse;

/// `200 OK` with no body: enough for a load balancer to know we are alive.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().finish()
}
