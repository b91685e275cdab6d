#[cfg(test)]
pub mod tests {
    use std::sync::{Mutex, MutexGuard};

    use actix_http::Request;
    use actix_service::Service;
    use actix_web::{body::BoxBody, dev::ServiceResponse, error::Error, test, web::Data, App};
    use serde::{de::DeserializeOwned, Serialize};
    use serde_json;

    use crate::routes::routes;

    // Tests share the same database tables, so row setup and teardown
    // must not interleave across the test runner's threads.
    static DB_LOCK: Mutex<()> = Mutex::new(());

    pub fn db_guard() -> MutexGuard<'static, ()> {
        DB_LOCK.lock().unwrap_or_else(|err| err.into_inner())
    }

    pub async fn get_service(
    ) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
        test::init_service(
            App::new()
                .app_data(Data::new(db::new_pool()))
                .configure(routes),
        )
        .await
    }

    /// Helper for HTTP GET integration tests
    pub async fn test_get<R>(route: &str) -> (u16, R)
    where
        R: DeserializeOwned,
    {
        let app = get_service().await;
        let req = test::TestRequest::get().uri(route);

        let res = test::call_service(&app, req.to_request()).await;

        let status = res.status().as_u16();
        let body = test::read_body(res).await;
        let json_body = serde_json::from_slice(&body).unwrap_or_else(|_| {
            panic!(
                "read_response_json failed during deserialization. response: {} status: {}",
                String::from_utf8(body.to_vec())
                    .unwrap_or_else(|_| "Could not convert Bytes -> String".to_string()),
                status
            )
        });

        (status, json_body)
    }

    /// Helper for form POSTs. Returns the raw response so callers can
    /// assert on redirect statuses and headers.
    pub async fn test_post_form<T: Serialize>(route: &str, params: &T) -> ServiceResponse<BoxBody> {
        let app = get_service().await;
        let req = test::TestRequest::post().set_form(params).uri(route);

        test::call_service(&app, req.to_request()).await
    }
}
