use dioxus::prelude::*;

use crate::{
    config::BOOKING_REDIRECT_DELAY,
    format::{
        format_currency, format_date, format_phone, format_time, payment_method_name,
        sanitize_pin, DateStyle,
    },
    hooks::{
        client::{use_client, Client},
        handle_error::use_handle_error,
        timer::sleep,
    },
    model::{PaymentMethod, Record, Service},
    validation::{LoginForm, QuickRegisterForm},
    view::{
        app::{Error, Routes},
        components::{
            form::{
                Button, ButtonFlavor, CheckInput, CheckStyle, Field, TextArea, TextInput,
                TextInputType,
            },
            layout::Loading,
            modal::Modal,
            slot_picker::SlotPicker,
        },
    },
    workflow::booking::{self, BookingFlow, DamagedNails, Next, Step},
};

#[component]
pub fn Page() -> Element {
    let client = use_client();
    let results = use_resource(move || async move {
        booking::load_services(&client.api())
            .await
            .map_err(Error::from_api_error)
    });

    use_handle_error(results.suspend()?, |services| {
        rsx! {
            PageBody {
                services: services,
            }
        }
    })
}

/// Page state shared by the event handlers.
#[derive(Clone, Copy, PartialEq)]
struct State {
    flow: Signal<BookingFlow>,
    show_login: Signal<bool>,
    processing: Signal<bool>,
    error: Signal<Option<String>>,
    success: Signal<Option<String>>,
}

impl State {
    fn use_state() -> Self {
        State {
            flow: use_signal(BookingFlow::new),
            show_login: use_signal(|| false),
            processing: use_signal(|| false),
            error: use_signal(|| None),
            success: use_signal(|| None),
        }
    }

    fn fail(mut self, message: String) {
        self.error.set(Some(message));
    }

    fn select_service(mut self, client: Client, service: Service) {
        let service_id = service.id().to_string();
        self.flow.write().select_service(service);
        self.error.set(None);

        spawn(async move {
            match booking::load_slots(&client.api(), &service_id).await {
                Ok(slots) => {
                    self.flow.write().slots_loaded(&service_id, slots);
                }
                Err(e) => {
                    tracing::error!("unable to load slots for {}: {}", service_id, e);
                    self.flow.write().slots_failed(&service_id);
                }
            }
        });
    }

    fn select_slot(mut self, slot_id: String) {
        let result = self.flow.write().select_slot(&slot_id);
        match result {
            Ok(()) => self.error.set(None),
            Err(e) => self.fail(e.to_string()),
        }
    }

    fn booked(mut self, mut client: Client, nav: Navigator) {
        self.flow.write().confirmed();
        self.show_login.set(false);
        self.error.set(None);
        self.success
            .set(Some("Agendamento realizado com sucesso!".to_owned()));
        client.changed();

        spawn(async move {
            sleep(BOOKING_REDIRECT_DELAY).await;
            nav.push(Routes::MyAppointments {});
        });
    }

    fn submit(mut self, mut client: Client, nav: Navigator) {
        let next = self.flow.read().submit(client.is_authenticated());
        let request = match next {
            Ok(Next::Book(request)) => request,
            Ok(Next::Authenticate) => {
                self.error.set(None);
                self.show_login.set(true);
                return;
            }
            Err(e) => {
                self.fail(e.to_string());
                return;
            }
        };

        self.processing.set(true);
        spawn(async move {
            let api = client.api();
            let result = booking::book(&api, api.session(), request).await;
            self.processing.set(false);

            match result {
                Ok(()) => self.booked(client, nav),
                Err(e) if e.is_unauthenticated() => {
                    client.logout();
                    self.show_login.set(true);
                }
                Err(e) => self.fail(e.to_string()),
            }
        });
    }
}

#[component]
fn PageBody(services: ReadOnlySignal<Vec<Service>>) -> Element {
    let state = State::use_state();
    let client = use_client();
    let nav = use_navigator();

    let flow = state.flow.read();
    let step = flow.step();

    let success = state.success.read().clone().map(|message| {
        rsx! {
            div {
                class: "notification is-success",
                "✓ {message}"
            }
        }
    });

    let login_modal = if *state.show_login.read() {
        rsx! {
            LoginModal {
                state: state,
            }
        }
    } else {
        rsx! {}
    };

    rsx! {
        section {
            class: "section",
            div {
                class: "container",
                { success }
                h1 {
                    class: "title",
                    "Agendar Serviço"
                }
                p {
                    class: "subtitle is-6",
                    "Escolha o serviço e horário"
                }
                Steps {
                    step: step,
                }

                h2 {
                    class: "title is-4 mt-5",
                    "1. Escolha seu serviço"
                }
                div {
                    class: "columns is-multiline",
                    { services.read().iter().cloned().map(|service| {
                        let id = service.id().to_string();
                        let is_selected = flow.is_service_selected(&id);
                        let class = if is_selected { "box has-background-primary-light" } else { "box" };
                        let price = format_currency(service.price);
                        let description = service.description.clone().filter(|d| !d.is_empty());
                        let name = service.name.clone();

                        rsx! {
                            div {
                                key: "{id}",
                                class: "column is-one-third",
                                div {
                                    class: "{class}",
                                    style: "cursor: pointer; height: 100%;",
                                    onclick: move |_| state.select_service(client, service.clone()),
                                    div {
                                        class: "level is-mobile mb-2",
                                        div {
                                            class: "level-left",
                                            h3 {
                                                class: "title is-5",
                                                "{name}"
                                            }
                                        }
                                        div {
                                            class: "level-right",
                                            span {
                                                class: "tag is-primary",
                                                "{price}"
                                            }
                                        }
                                    }
                                    { description.map(|description| rsx! {
                                        p {
                                            class: "is-size-7",
                                            "{description}"
                                        }
                                    }) }
                                    { is_selected.then(|| rsx! {
                                        p {
                                            class: "has-text-primary has-text-weight-bold",
                                            "✓"
                                        }
                                    }) }
                                }
                            }
                        }
                    }) }
                }

                { flow.service().is_some().then(|| rsx! {
                    DamagedNailsSurvey {
                        state: state,
                    }
                    SlotSection {
                        state: state,
                    }
                }) }

                { (step == Step::Review).then(|| rsx! {
                    ReviewSection {
                        state: state,
                        onconfirm: move |_| state.submit(client, nav),
                    }
                }) }
            }
        }
        { login_modal }
    }
}

#[component]
fn Steps(step: Step) -> Element {
    let (service, slot, confirm) = match step {
        Step::SelectService | Step::Confirmed => ("is-primary", "is-light", "is-light"),
        Step::SelectSlot => ("is-success", "is-primary", "is-light"),
        Step::Review => ("is-success", "is-success", "is-primary"),
    };

    rsx! {
        div {
            class: "tags",
            span { class: "tag is-medium {service}", "1 Serviço" }
            span { class: "tag is-medium is-white", "›" }
            span { class: "tag is-medium {slot}", "2 Horário" }
            span { class: "tag is-medium is-white", "›" }
            span { class: "tag is-medium {confirm}", "3 Confirmar" }
        }
    }
}

#[component]
fn DamagedNailsSurvey(state: State) -> Element {
    let mut flow = state.flow;
    let answer = flow.read().damaged_nails().clone();

    let details = match &answer {
        DamagedNails::Yes { note } => {
            let note = note.clone();
            rsx! {
                div {
                    class: "notification is-warning is-light mt-3",
                    p {
                        class: "mb-2",
                        "⚠️ Está sujeito a taxa adicional de "
                        strong { "R$5,00 por unha" }
                        " que necessite novo alongamento."
                    }
                    TextArea {
                        placeholder: "Descreva quantas unhas estão danificadas (opcional)".to_owned(),
                        value: note,
                        oninput: move |e: FormEvent| {
                            flow.write().answer_damaged_nails(DamagedNails::Yes { note: e.value() });
                        },
                    }
                }
            }
        }
        DamagedNails::No | DamagedNails::Unanswered => rsx! {},
    };

    let is_yes = matches!(answer, DamagedNails::Yes { .. });

    rsx! {
        h2 {
            class: "title is-4 mt-5",
            "Unhas Danificadas"
        }
        div {
            class: "box",
            p {
                class: "mb-3",
                "Você possui alguma unha quebrada ou danificada que necessita de um novo alongamento?"
            }
            div {
                class: "control",
                CheckInput {
                    style: CheckStyle::Radio,
                    name: "damaged-nails".to_owned(),
                    label: "Sim",
                    value: is_yes,
                    onclick: move |_| {
                        if !is_yes {
                            flow.write().answer_damaged_nails(DamagedNails::Yes { note: String::new() });
                        }
                    },
                }
                CheckInput {
                    style: CheckStyle::Radio,
                    name: "damaged-nails".to_owned(),
                    label: "Não",
                    value: answer == DamagedNails::No,
                    onclick: move |_| flow.write().answer_damaged_nails(DamagedNails::No),
                }
            }
            { details }
        }
    }
}

#[component]
fn SlotSection(state: State) -> Element {
    let flow = state.flow.read();

    let body = if flow.is_loading_slots() {
        rsx! {
            Loading {
                message: "Carregando horários...".to_owned(),
            }
        }
    } else {
        rsx! {
            SlotPicker {
                groups: flow.slot_groups(),
                selected: flow.slot().map(|slot| slot.id().to_string()),
                date_style: DateStyle::Compact,
                onselect: move |slot_id| state.select_slot(slot_id),
            }
        }
    };

    rsx! {
        h2 {
            class: "title is-4 mt-5",
            onmounted: move |e| async move {
                if let Err(e) = e.data().scroll_to(ScrollBehavior::Smooth).await {
                    tracing::debug!("unable to scroll to slots: {:?}", e);
                }
            },
            "2. Escolha o horário"
        }
        { body }
    }
}

#[component]
fn ReviewSection(state: State, onconfirm: EventHandler<()>) -> Element {
    let mut flow = state.flow;
    let client = use_client();
    let is_authenticated = client.is_authenticated();

    let current = flow.read();
    let (Some(service), Some(slot)) = (current.service(), current.slot()) else {
        return rsx! {};
    };

    let name = service.name.clone();
    let price = format_currency(service.price);
    let date = format_date(slot.date.as_deref(), DateStyle::Compact);
    let time = format_time(slot.start_time.as_deref());
    let payment = current.payment_method();

    let error = state.error.read().clone().map(|error| {
        rsx! {
            div {
                class: "notification is-danger is-light",
                "{error}"
            }
        }
    });

    let confirm_text = if is_authenticated {
        "Confirmar Agendamento"
    } else {
        "Continuar para Agendar"
    };

    let hint = (!is_authenticated).then(|| {
        rsx! {
            p {
                class: "help has-text-centered",
                "Você precisará informar seus dados para finalizar"
            }
        }
    });

    rsx! {
        h2 {
            class: "title is-4 mt-5",
            onmounted: move |e| async move {
                if let Err(e) = e.data().scroll_to(ScrollBehavior::Smooth).await {
                    tracing::debug!("unable to scroll to summary: {:?}", e);
                }
            },
            "3. Confirme seu agendamento"
        }
        div {
            class: "box",
            table {
                class: "table is-fullwidth",
                tbody {
                    tr {
                        th { "Serviço" }
                        td { "{name}" }
                    }
                    tr {
                        th { "Data" }
                        td { "{date}" }
                    }
                    tr {
                        th { "Horário" }
                        td { "{time}" }
                    }
                    tr {
                        th { "Total" }
                        td {
                            class: "has-text-weight-bold",
                            "{price}"
                        }
                    }
                }
            }
            Field {
                label: "Pagamento no local:",
                div {
                    class: "control",
                    { [PaymentMethod::Pix, PaymentMethod::Dinheiro].into_iter().map(|method| {
                        rsx! {
                            CheckInput {
                                key: "{method}",
                                style: CheckStyle::Radio,
                                name: "payment-method".to_owned(),
                                label: payment_method_name(method).to_owned(),
                                value: payment == method,
                                onclick: move |_| flow.write().set_payment_method(method),
                            }
                        }
                    }) }
                }
            }
            { error }
            Button {
                flavor: ButtonFlavor::Primary,
                is_loading: *state.processing.read(),
                onclick: move |_| onconfirm.call(()),
                "📅 {confirm_text}"
            }
            { hint }
        }
    }
}

#[derive(Clone, Copy, PartialEq)]
enum AuthMode {
    Quick,
    Login,
}

#[component]
fn LoginModal(state: State) -> Element {
    let mut mode = use_signal(|| AuthMode::Quick);
    let mut quick_form = use_signal(QuickRegisterForm::default);
    let mut login_form = use_signal(LoginForm::default);
    let mut show_password = use_signal(|| false);

    let mut client = use_client();
    let nav = use_navigator();
    let mut show_login = state.show_login;
    let mut processing = state.processing;

    let current = state.flow.read();
    let summary = match (current.service(), current.slot()) {
        (Some(service), Some(slot)) => format!(
            "{} · {} · {} às {}",
            service.name,
            format_currency(service.price),
            format_date(slot.date.as_deref(), DateStyle::Compact),
            format_time(slot.start_time.as_deref())
        ),
        _ => String::new(),
    };

    let quick_tab = if *mode.read() == AuthMode::Quick { "is-active" } else { "" };
    let login_tab = if *mode.read() == AuthMode::Login { "is-active" } else { "" };

    let error = state.error.read().clone().map(|error| {
        rsx! {
            div {
                class: "notification is-danger is-light",
                "{error}"
            }
        }
    });

    let body = match *mode.read() {
        AuthMode::Quick => rsx! {
            Field {
                label: "Nome Completo",
                TextInput {
                    placeholder: "Seu nome".to_owned(),
                    value: TextInputType::Text(quick_form.read().name.clone()),
                    oninput: move |e: FormEvent| quick_form.write().name = e.value(),
                }
            }
            Field {
                label: "WhatsApp",
                TextInput {
                    placeholder: "(00) 00000-0000".to_owned(),
                    maxlength: 15,
                    value: TextInputType::Tel(quick_form.read().phone.clone()),
                    oninput: move |e: FormEvent| quick_form.write().phone = format_phone(&e.value()),
                }
            }
            Field {
                label: "E-mail",
                TextInput {
                    placeholder: "seu@email.com".to_owned(),
                    value: TextInputType::Email(quick_form.read().email.clone()),
                    oninput: move |e: FormEvent| quick_form.write().email = e.value(),
                }
            }
            Field {
                label: "Senha (4 dígitos)",
                help: "Use essa senha para acessar seus agendamentos".to_owned(),
                TextInput {
                    placeholder: "••••".to_owned(),
                    maxlength: 4,
                    numeric: true,
                    value: TextInputType::Password(quick_form.read().pin.clone()),
                    oninput: move |e: FormEvent| quick_form.write().pin = sanitize_pin(&e.value()),
                }
            }
        },
        AuthMode::Login => {
            let password = login_form.read().password.clone();
            let password = if *show_password.read() {
                TextInputType::Text(password)
            } else {
                TextInputType::Password(password)
            };
            let toggle = if *show_password.read() { "Ocultar senha" } else { "Mostrar senha" };

            rsx! {
                Field {
                    label: "E-mail",
                    TextInput {
                        placeholder: "seu@email.com".to_owned(),
                        value: TextInputType::Email(login_form.read().email.clone()),
                        oninput: move |e: FormEvent| login_form.write().email = e.value(),
                    }
                }
                Field {
                    label: "Senha",
                    TextInput {
                        placeholder: "••••".to_owned(),
                        value: password,
                        oninput: move |e: FormEvent| login_form.write().password = e.value(),
                    }
                    a {
                        class: "is-size-7",
                        onclick: move |_| {
                            let shown = *show_password.read();
                            show_password.set(!shown);
                        },
                        "{toggle}"
                    }
                }
            }
        }
    };

    rsx! {
        Modal {
            title: "Finalizar Agendamento",
            success_text: "Confirmar Agendamento",
            is_loading: *processing.read(),
            onclose: move |_| show_login.set(false),
            onsubmit: move |_| {
                let request = match state.flow.read().request() {
                    Ok(request) => request,
                    Err(e) => {
                        state.fail(e.to_string());
                        return;
                    }
                };

                let auth_mode = *mode.read();
                let quick = quick_form();
                let login = login_form();

                processing.set(true);
                spawn(async move {
                    let api = client.api();
                    let result = match auth_mode {
                        AuthMode::Quick => {
                            booking::quick_register_and_book(&api, api.session(), &quick, request).await
                        }
                        AuthMode::Login => {
                            booking::login_and_book(&api, api.session(), &login, request).await
                        }
                    };
                    processing.set(false);

                    match result {
                        Ok(_) => state.booked(client, nav),
                        Err(e) => {
                            client.changed();
                            state.fail(e.to_string());
                        }
                    }
                });
            },
            p {
                class: "mb-4",
                "Informe seus dados para confirmar"
            }
            div {
                class: "tabs is-fullwidth",
                ul {
                    li {
                        class: "{quick_tab}",
                        a {
                            onclick: move |_| mode.set(AuthMode::Quick),
                            "Cadastro Rápido"
                        }
                    }
                    li {
                        class: "{login_tab}",
                        a {
                            onclick: move |_| mode.set(AuthMode::Login),
                            "Já tenho conta"
                        }
                    }
                }
            }
            { body }
            { error }
            div {
                class: "notification is-light",
                "{summary}"
            }
        }
    }
}
