use super::handler;
use crate::domain_model::{MessageId, OrganizationId};
use crate::server::Server;
use std::convert::Infallible;
use std::sync::Arc;
use warp::Filter;

pub fn routes(
    server: Arc<Server>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    let list_messages = warp::get()
        .and(warp::path("organizations"))
        .and(warp::path::param::<OrganizationId>())
        .and(warp::path("messages"))
        .and(warp::path::end())
        .and(with(server.message_service.clone()))
        .and_then(handler::list_messages);

    let get_message = warp::get()
        .and(warp::path("organizations"))
        .and(warp::path::param::<OrganizationId>())
        .and(warp::path("messages"))
        .and(warp::path::param::<MessageId>())
        .and(warp::path::end())
        .and(with(server.message_service.clone()))
        .and_then(handler::get_message);

    let create_message = warp::post()
        .and(warp::path("organizations"))
        .and(warp::path::param::<OrganizationId>())
        .and(warp::path("messages"))
        .and(warp::path::end())
        .and(warp::body::json())
        .and(with(server.message_service.clone()))
        .and_then(handler::create_message);

    let update_message = warp::put()
        .and(warp::path("organizations"))
        .and(warp::path::param::<OrganizationId>())
        .and(warp::path("messages"))
        .and(warp::path::param::<MessageId>())
        .and(warp::path::end())
        .and(warp::body::json())
        .and(with(server.message_service.clone()))
        .and_then(handler::update_message);

    let delete_message = warp::delete()
        .and(warp::path("organizations"))
        .and(warp::path::param::<OrganizationId>())
        .and(warp::path("messages"))
        .and(warp::path::param::<MessageId>())
        .and(warp::path::end())
        .and(with(server.message_service.clone()))
        .and_then(handler::delete_message);

    list_messages
        .or(get_message)
        .or(create_message)
        .or(update_message)
        .or(delete_message)
}

fn with<ServiceType>(
    service: Arc<ServiceType>,
) -> impl Filter<Extract = (Arc<ServiceType>,), Error = Infallible> + Clone
where
    ServiceType: Send + Sync + ?Sized,
{
    warp::any().map(move || service.clone())
}
