use actix_web::{delete, get, post, put, web, HttpResponse};

use crate::models::dto::{CreateTradeRequest, TradeResponse, UpdateTradeRequest};
use crate::services::trade_service::TradeService;

#[get("")]
pub async fn get_all_trades(service: web::Data<TradeService>) -> HttpResponse {
    match service.get_all_trades().await {
        Ok(trades) => {
            let response: Vec<TradeResponse> =
                trades.into_iter().map(TradeResponse::from).collect();
            HttpResponse::Ok().json(response)
        }
        Err(e) => HttpResponse::InternalServerError().json(format!("Error: {}", e)),
    }
}

#[get("/{id}")]
pub async fn get_trade_by_id(
    service: web::Data<TradeService>,
    path: web::Path<i64>,
) -> HttpResponse {
    let id = path.into_inner();

    match service.get_trade_by_id(id).await {
        Ok(Some(trade)) => HttpResponse::Ok().json(TradeResponse::from(trade)),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => HttpResponse::InternalServerError().json(format!("Error: {}", e)),
    }
}

#[post("")]
pub async fn create_trade(
    service: web::Data<TradeService>,
    request: web::Json<CreateTradeRequest>,
) -> HttpResponse {
    match service.create_trade(request.into_inner()).await {
        Ok(trade) => HttpResponse::Created().json(TradeResponse::from(trade)),
        Err(e) => HttpResponse::InternalServerError().json(format!("Error: {}", e)),
    }
}

#[put("/{id}")]
pub async fn update_trade(
    service: web::Data<TradeService>,
    path: web::Path<i64>,
    request: web::Json<UpdateTradeRequest>,
) -> HttpResponse {
    let id = path.into_inner();

    match service.update_trade(id, request.into_inner()).await {
        Ok(Some(trade)) => HttpResponse::Ok().json(TradeResponse::from(trade)),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => HttpResponse::InternalServerError().json(format!("Error: {}", e)),
    }
}

#[delete("/{id}")]
pub async fn delete_trade(
    service: web::Data<TradeService>,
    path: web::Path<i64>,
) -> HttpResponse {
    let id = path.into_inner();

    match service.delete_trade(id).await {
        Ok(true) => HttpResponse::NoContent().finish(),
        Ok(false) => HttpResponse::NotFound().finish(),
        Err(e) => HttpResponse::InternalServerError().json(format!("Error: {}", e)),
    }
}

pub fn trades_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/trades")
            .service(get_all_trades)
            .service(create_trade)
            .service(get_trade_by_id)
            .service(update_trade)
            .service(delete_trade)
    );
}
