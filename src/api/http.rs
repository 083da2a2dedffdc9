use super::{
    envelope::{AppointmentList, CurrentUser, SlotList},
    BookingApi, Error,
};
use crate::{
    model::{
        Appointment, AppointmentStatus, AuthResponse, DashboardStats, LoginRequest,
        NewAppointment, QuickRegisterRequest, RegisterRequest, RescheduleRequest, Service,
        StatusUpdate, TimeSlot, User,
    },
    session::{Session, SessionStore},
};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

/// [`BookingApi`] over HTTP. Every request carries the session's bearer token
/// when there is one.
#[derive(Clone, Debug)]
pub struct HttpApi<S> {
    client: reqwest::Client,
    base_url: String,
    session: Session<S>,
}

impl<S: SessionStore> HttpApi<S> {
    pub fn new(base_url: impl Into<String>, session: Session<S>) -> Self {
        HttpApi {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            session,
        }
    }

    pub fn session(&self) -> &Session<S> {
        &self.session
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!("{} {}", method, path);

        let request = self.client.request(method, self.url(path));
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, Error> {
        let response = check(request.send().await.map_err(Error::Transport)?).await?;
        response.json::<T>().await.map_err(Error::Decode)
    }

    async fn execute(&self, request: RequestBuilder) -> Result<(), Error> {
        check(request.send().await.map_err(Error::Transport)?).await?;
        Ok(())
    }
}

async fn check(response: Response) -> Result<Response, Error> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().path().to_owned();
    let body = response.text().await.unwrap_or_default();
    let error = Error::from_response(status.as_u16(), &body);
    tracing::error!("request to {} failed: {}", url, error);
    Err(error)
}

impl<S: SessionStore> BookingApi for HttpApi<S> {
    async fn register(&self, request: RegisterRequest) -> Result<AuthResponse, Error> {
        self.fetch(self.request(Method::POST, "/auth/register").json(&request))
            .await
    }

    async fn login(&self, request: LoginRequest) -> Result<AuthResponse, Error> {
        self.fetch(self.request(Method::POST, "/auth/login").json(&request))
            .await
    }

    async fn quick_register(&self, request: QuickRegisterRequest) -> Result<AuthResponse, Error> {
        self.fetch(
            self.request(Method::POST, "/auth/quick-register")
                .json(&request),
        )
        .await
    }

    async fn current_user(&self) -> Result<User, Error> {
        let response: CurrentUser = self.fetch(self.request(Method::GET, "/auth/me")).await?;
        Ok(response.user)
    }

    async fn services(&self) -> Result<Vec<Service>, Error> {
        self.fetch(self.request(Method::GET, "/services")).await
    }

    async fn available_slots(&self, service_id: String) -> Result<Vec<TimeSlot>, Error> {
        let list: SlotList = self
            .fetch(
                self.request(Method::GET, "/appointments/available-slots")
                    .query(&[("serviceId", service_id.as_str())]),
            )
            .await?;
        Ok(list.into_slots())
    }

    async fn create_appointment(&self, request: NewAppointment) -> Result<(), Error> {
        self.execute(self.request(Method::POST, "/appointments").json(&request))
            .await
    }

    async fn my_appointments(&self) -> Result<Vec<Appointment>, Error> {
        let list: AppointmentList = self
            .fetch(self.request(Method::GET, "/appointments/my"))
            .await?;
        Ok(list.into_appointments())
    }

    async fn dashboard_stats(&self) -> Result<DashboardStats, Error> {
        self.fetch(self.request(Method::GET, "/admin/dashboard"))
            .await
    }

    async fn admin_appointments(&self, limit: Option<u32>) -> Result<Vec<Appointment>, Error> {
        let mut request = self.request(Method::GET, "/admin/appointments");
        if let Some(limit) = limit {
            request = request.query(&[("limit", limit)]);
        }

        let list: AppointmentList = self.fetch(request).await?;
        Ok(list.into_appointments())
    }

    async fn update_status(
        &self,
        appointment_id: String,
        status: AppointmentStatus,
    ) -> Result<(), Error> {
        self.execute(
            self.request(
                Method::PATCH,
                &format!("/admin/appointments/{}/status", appointment_id),
            )
            .json(&StatusUpdate { status }),
        )
        .await
    }

    async fn delete_appointment(&self, appointment_id: String) -> Result<(), Error> {
        self.execute(self.request(
            Method::DELETE,
            &format!("/appointments/{}", appointment_id),
        ))
        .await
    }

    async fn reschedule(&self, appointment_id: String, new_time_slot_id: String) -> Result<(), Error> {
        self.execute(
            self.request(
                Method::PATCH,
                &format!("/appointments/{}/reschedule", appointment_id),
            )
            .json(&RescheduleRequest { new_time_slot_id }),
        )
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::AuthResponse,
        session::MemoryStore,
        test_helpers::{client_user, token_without_expiry},
    };
    use reqwest::header::AUTHORIZATION;

    #[test]
    fn trims_trailing_slash() {
        let api = HttpApi::new("http://localhost:5000/api/", Session::new(MemoryStore::default()));
        assert_eq!(api.url("/services"), "http://localhost:5000/api/services");
    }

    #[test]
    fn anonymous_requests_have_no_authorization() {
        let api = HttpApi::new("http://localhost:5000/api", Session::new(MemoryStore::default()));
        let request = api.request(Method::GET, "/services").build().unwrap();
        assert!(request.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn requests_pick_up_a_token_stored_mid_flow() {
        let session = Session::new(MemoryStore::default());
        let api = HttpApi::new("http://localhost:5000/api", session.clone());

        let token = token_without_expiry();
        session
            .begin(AuthResponse {
                token: Some(token.clone()),
                user: Some(client_user()),
            })
            .unwrap();

        let request = api.request(Method::POST, "/appointments").build().unwrap();
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap().to_str().unwrap(),
            format!("Bearer {}", token)
        );
    }

    #[test]
    fn slot_query_string() {
        let api = HttpApi::new("http://localhost:5000/api", Session::new(MemoryStore::default()));
        let request = api
            .request(Method::GET, "/appointments/available-slots")
            .query(&[("serviceId", "svc1")])
            .build()
            .unwrap();
        assert_eq!(
            request.url().as_str(),
            "http://localhost:5000/api/appointments/available-slots?serviceId=svc1"
        );
    }
}
