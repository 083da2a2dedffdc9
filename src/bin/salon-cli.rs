use anyhow::anyhow;
use clap::{Parser, Subcommand};
use salon_booking::{
    api::{BookingApi as _, HttpApi},
    config::DEFAULT_API_URL,
    format::{
        format_currency, format_currency_whole, format_date, format_phone, format_time,
        format_time_range, payment_method_label, status_label, DateStyle,
    },
    model::{Appointment, AppointmentStatus, PaymentMethod, Record as _, Service, TimeSlot},
    session::{FileStore, Session},
    validation::{LoginForm, QuickRegisterForm, RegisterForm},
    workflow::{
        account,
        admin::{self, appointment_actions, filter_appointments, RescheduleFlow, StatusFilter},
        booking::{self, BookingFlow, DamagedNails, Next},
    },
};
use std::{env, fmt, str::FromStr};
use tracing_subscriber::{fmt as log_fmt, EnvFilter};

#[derive(Parser)]
struct Cli {
    #[clap(long, env = "SALON_API_URL", default_value = DEFAULT_API_URL, global = true)]
    api_url: String,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Login {
        #[clap(long)]
        email: Option<String>,

        #[clap(long)]
        password: Option<String>,

        #[clap(long)]
        nointeractive: bool,
    },

    Register {
        #[clap(long)]
        name: Option<String>,

        #[clap(long)]
        email: Option<String>,

        #[clap(long)]
        password: Option<String>,

        #[clap(long)]
        nointeractive: bool,
    },

    Logout,

    Whoami,

    Services,

    Slots {
        #[clap(long)]
        service: Option<String>,

        #[clap(long)]
        nointeractive: bool,
    },

    Book {
        #[clap(long)]
        service: Option<String>,

        #[clap(long)]
        slot: Option<String>,

        /// pix, dinheiro, credito or debito
        #[clap(long)]
        payment: Option<String>,

        #[clap(long)]
        damaged_nails: bool,

        #[clap(long, requires("damaged_nails"))]
        note: Option<String>,

        /// Quick registration details, used when there is no session.
        #[clap(long)]
        name: Option<String>,

        #[clap(long)]
        phone: Option<String>,

        #[clap(long)]
        email: Option<String>,

        #[clap(long)]
        pin: Option<String>,

        #[clap(long)]
        nointeractive: bool,
    },

    Appointments,

    Admin {
        #[clap(subcommand)]
        subcmd: AdminSubcommand,
    },
}

#[derive(Subcommand)]
enum AdminSubcommand {
    Dashboard,

    Appointments {
        /// pending, confirmed, completed or cancelled
        #[clap(long)]
        status: Option<String>,
    },

    Status {
        #[clap(long)]
        id: String,

        /// confirmed, completed or cancelled
        #[clap(long)]
        status: String,
    },

    Reschedule {
        #[clap(long)]
        id: String,

        #[clap(long)]
        slot: Option<String>,

        #[clap(long)]
        nointeractive: bool,
    },

    Delete {
        #[clap(long)]
        id: String,

        #[clap(long)]
        yes: bool,

        #[clap(long)]
        nointeractive: bool,
    },
}

type Api = HttpApi<FileStore>;

fn session_path() -> std::path::PathBuf {
    env::temp_dir().join("salon-session.json")
}

struct Choice<T> {
    label: String,
    value: T,
}

impl<T> fmt::Display for Choice<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

fn text(value: Option<String>, prompt: &str, flag: &str, interactive: bool) -> Result<String, anyhow::Error> {
    match value {
        Some(value) => Ok(value),
        None if interactive => Ok(inquire::Text::new(prompt).prompt()?),
        None => Err(anyhow!("--nointeractive set, --{} must be set", flag)),
    }
}

fn password(
    value: Option<String>,
    prompt: &str,
    flag: &str,
    interactive: bool,
) -> Result<String, anyhow::Error> {
    match value {
        Some(value) => Ok(value),
        None if interactive => Ok(inquire::Password::new(prompt)
            .without_confirmation()
            .prompt()?),
        None => Err(anyhow!("--nointeractive set, --{} must be set", flag)),
    }
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    log_fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let api = HttpApi::new(cli.api_url, Session::new(FileStore::new(session_path())));

    match cli.command {
        Commands::Login {
            email,
            password,
            nointeractive,
        } => login(&api, email, password, !nointeractive).await?,
        Commands::Register {
            name,
            email,
            password,
            nointeractive,
        } => register(&api, name, email, password, !nointeractive).await?,
        Commands::Logout => {
            api.session().end();
            println!("Sessão encerrada");
        }
        Commands::Whoami => whoami(&api).await?,
        Commands::Services => {
            for service in booking::load_services(&api).await? {
                print_service(&service);
            }
        }
        Commands::Slots {
            service,
            nointeractive,
        } => {
            let service = pick_service(&api, service, !nointeractive).await?;
            let slots = booking::load_slots(&api, service.id().as_str()).await?;
            print_slots(&slots);
        }
        Commands::Book {
            service,
            slot,
            payment,
            damaged_nails,
            note,
            name,
            phone,
            email,
            pin,
            nointeractive,
        } => {
            let answer = if damaged_nails {
                DamagedNails::Yes {
                    note: note.unwrap_or_default(),
                }
            } else {
                DamagedNails::No
            };

            let payment = payment
                .map(|payment| PaymentMethod::from_str(&payment))
                .transpose()
                .map_err(|_| anyhow!("invalid payment method"))?
                .unwrap_or_default();

            let guest = QuickRegisterForm {
                name: name.unwrap_or_default(),
                phone: phone.unwrap_or_default(),
                email: email.unwrap_or_default(),
                pin: pin.unwrap_or_default(),
            };

            book(&api, service, slot, payment, answer, guest, !nointeractive).await?;
        }
        Commands::Appointments => {
            let appointments = api.my_appointments().await?;
            if appointments.is_empty() {
                println!("Nenhum agendamento encontrado");
            }
            for appointment in &appointments {
                print_appointment(appointment, false);
            }
        }
        Commands::Admin { subcmd } => match subcmd {
            AdminSubcommand::Dashboard => dashboard(&api).await?,
            AdminSubcommand::Appointments { status } => {
                let filter = match status.as_deref() {
                    None => StatusFilter::All,
                    Some(status) => match AppointmentStatus::from_str(status) {
                        Ok(AppointmentStatus::Pending) => StatusFilter::Pending,
                        Ok(AppointmentStatus::Confirmed) => StatusFilter::Confirmed,
                        Ok(AppointmentStatus::Completed) => StatusFilter::Completed,
                        Ok(AppointmentStatus::Cancelled) => StatusFilter::Cancelled,
                        _ => return Err(anyhow!("invalid status")),
                    },
                };

                let appointments = admin::load_appointments(&api).await?;
                for appointment in filter_appointments(&appointments, filter) {
                    print_appointment(appointment, true);
                }
            }
            AdminSubcommand::Status { id, status } => {
                let status =
                    AppointmentStatus::from_str(&status).map_err(|_| anyhow!("invalid status"))?;
                let appointment = find_appointment(&api, &id).await?;
                admin::change_status(&api, &appointment, status).await?;
                println!("Status atualizado para {}", status_label(status));
            }
            AdminSubcommand::Reschedule {
                id,
                slot,
                nointeractive,
            } => reschedule(&api, id, slot, !nointeractive).await?,
            AdminSubcommand::Delete {
                id,
                yes,
                nointeractive,
            } => {
                let confirmed = match (yes, nointeractive) {
                    (true, _) => true,
                    (false, false) => {
                        inquire::Confirm::new("Tem certeza que deseja excluir este agendamento?")
                            .with_default(false)
                            .prompt()?
                    }
                    (false, true) => {
                        return Err(anyhow!("--nointeractive set, --yes must be set"));
                    }
                };

                if confirmed {
                    admin::delete_appointment(&api, &id).await?;
                    println!("Excluído com sucesso!");
                }
            }
        },
    };

    Ok(())
}

async fn login(
    api: &Api,
    email: Option<String>,
    password_value: Option<String>,
    interactive: bool,
) -> Result<(), anyhow::Error> {
    let form = LoginForm {
        email: text(email, "Email", "email", interactive)?,
        password: password(password_value, "Senha", "password", interactive)?,
    };

    let user = account::login(api, api.session(), &form).await?;
    println!(
        "Bem-vinda, {}",
        user.map(|user| user.name).unwrap_or_default()
    );
    Ok(())
}

async fn register(
    api: &Api,
    name: Option<String>,
    email: Option<String>,
    password_value: Option<String>,
    interactive: bool,
) -> Result<(), anyhow::Error> {
    let name = text(name, "Nome", "name", interactive)?;
    let email = text(email, "Email", "email", interactive)?;
    let (password_value, confirm_password) = match password_value {
        Some(password_value) => (password_value.clone(), password_value),
        None if interactive => {
            let password_value = inquire::Password::new("Senha").prompt()?;
            (password_value.clone(), password_value)
        }
        None => return Err(anyhow!("--nointeractive set, --password must be set")),
    };

    let form = RegisterForm {
        name,
        email,
        password: password_value,
        confirm_password,
    };

    account::register(api, api.session(), &form).await?;
    println!("Conta criada");
    Ok(())
}

async fn whoami(api: &Api) -> Result<(), anyhow::Error> {
    if !api.session().is_authenticated() {
        println!("Sem sessão");
        return Ok(());
    }

    let user = account::refresh_user(api, api.session()).await?;
    println!("{} <{}> ({})", user.name, user.email, user.role);
    if let Some(phone) = user.phone.as_deref() {
        println!("{}", format_phone(phone));
    }
    Ok(())
}

async fn pick_service(
    api: &Api,
    service_id: Option<String>,
    interactive: bool,
) -> Result<Service, anyhow::Error> {
    let services = booking::load_services(api).await?;

    match service_id {
        Some(service_id) => services
            .into_iter()
            .find(|service| service.id().as_str() == service_id)
            .ok_or_else(|| anyhow!("service {} not found", service_id)),
        None if interactive => {
            let choices = services
                .into_iter()
                .map(|service| Choice {
                    label: format!("{} ({})", service.name, format_currency(service.price)),
                    value: service,
                })
                .collect();
            Ok(inquire::Select::new("Serviço", choices).prompt()?.value)
        }
        None => Err(anyhow!("--nointeractive set, --service must be set")),
    }
}

#[allow(clippy::too_many_arguments)]
async fn book(
    api: &Api,
    service_id: Option<String>,
    slot_id: Option<String>,
    payment: PaymentMethod,
    damaged_nails: DamagedNails,
    mut guest: QuickRegisterForm,
    interactive: bool,
) -> Result<(), anyhow::Error> {
    let mut flow = BookingFlow::new();

    let service = pick_service(api, service_id, interactive).await?;
    let selected_service_id = service.id().to_string();
    flow.select_service(service);

    match booking::load_slots(api, &selected_service_id).await {
        Ok(slots) => {
            flow.slots_loaded(&selected_service_id, slots);
        }
        Err(e) => {
            flow.slots_failed(&selected_service_id);
            return Err(e.into());
        }
    }

    if flow.slots().is_empty() {
        return Err(anyhow!("Nenhum horário disponível"));
    }

    let slot_id = match slot_id {
        Some(slot_id) => slot_id,
        None if interactive => {
            let choices = flow
                .slots()
                .iter()
                .map(|slot| Choice {
                    label: format!(
                        "{} {}",
                        format_date(slot.date.as_deref(), DateStyle::Compact),
                        format_time(slot.start_time.as_deref())
                    ),
                    value: slot.id().to_string(),
                })
                .collect();
            inquire::Select::new("Horário", choices).prompt()?.value
        }
        None => return Err(anyhow!("--nointeractive set, --slot must be set")),
    };

    flow.select_slot(&slot_id)?;
    flow.answer_damaged_nails(damaged_nails);
    flow.set_payment_method(payment);

    match flow.submit(api.session().is_authenticated())? {
        Next::Book(request) => booking::book(api, api.session(), request).await?,
        Next::Authenticate => {
            println!("Cadastro rápido");
            guest.name = text(non_empty(guest.name), "Nome completo", "name", interactive)?;
            guest.phone = text(non_empty(guest.phone), "WhatsApp", "phone", interactive)?;
            guest.email = text(non_empty(guest.email), "E-mail", "email", interactive)?;
            guest.pin = password(non_empty(guest.pin), "Senha (4 dígitos)", "pin", interactive)?;

            booking::quick_register_and_book(api, api.session(), &guest, flow.request()?).await?;
        }
    }

    flow.confirmed();
    println!("Agendamento realizado com sucesso!");
    Ok(())
}

fn non_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

async fn dashboard(api: &Api) -> Result<(), anyhow::Error> {
    let dashboard = admin::load_dashboard(api).await?;
    let stats = &dashboard.stats;

    println!("Total de Agendamentos: {}", stats.total_appointments);
    println!("Pendentes: {}", stats.pending_appointments);
    println!("Clientes Cadastrados: {}", stats.total_clients);
    println!("Receita do Mês: {}", format_currency_whole(stats.month_revenue));
    println!();
    println!("Agendamentos Recentes");
    if dashboard.recent.is_empty() {
        println!("Nenhum agendamento");
    }
    for appointment in &dashboard.recent {
        print_appointment(appointment, true);
    }
    Ok(())
}

async fn find_appointment(api: &Api, id: &str) -> Result<Appointment, anyhow::Error> {
    admin::load_appointments(api)
        .await?
        .into_iter()
        .find(|appointment| appointment.id().as_str() == id)
        .ok_or_else(|| anyhow!("appointment {} not found", id))
}

async fn reschedule(
    api: &Api,
    id: String,
    slot_id: Option<String>,
    interactive: bool,
) -> Result<(), anyhow::Error> {
    let appointment = find_appointment(api, &id).await?;
    let mut flow = RescheduleFlow::open(api, appointment).await?;

    if flow.slots().is_empty() {
        return Err(anyhow!("Nenhum horário disponível"));
    }

    let slot_id = match slot_id {
        Some(slot_id) => slot_id,
        None if interactive => {
            let choices = flow
                .slots()
                .iter()
                .map(|slot| Choice {
                    label: format!(
                        "{} {}",
                        format_date(slot.date.as_deref(), DateStyle::Long),
                        format_time_range(slot)
                    ),
                    value: slot.id().to_string(),
                })
                .collect();
            inquire::Select::new("Selecione o Novo Horário", choices)
                .prompt()?
                .value
        }
        None => return Err(anyhow!("--nointeractive set, --slot must be set")),
    };

    flow.select(&slot_id)?;
    flow.confirm(api).await?;
    println!("Remanejado com sucesso!");
    Ok(())
}

fn print_service(service: &Service) {
    println!(
        "{}  {}  {}",
        service.id(),
        service.name,
        format_currency(service.price)
    );
    if let Some(description) = service.description.as_deref() {
        println!("    {}", description);
    }
}

fn print_slots(slots: &[TimeSlot]) {
    if slots.is_empty() {
        println!("Nenhum horário disponível");
    }

    for group in salon_booking::format::group_slots_by_date(slots) {
        println!("{}", format_date(Some(&group.day), DateStyle::Compact));
        for slot in &group.slots {
            println!("    {}  {}", slot.id(), format_time(slot.start_time.as_deref()));
        }
    }
}

fn print_appointment(appointment: &Appointment, with_actions: bool) {
    println!("{}", appointment_line(appointment, with_actions));
}

/// One line per appointment. The back office listings also show what can be
/// done with it.
fn appointment_line(appointment: &Appointment, with_actions: bool) -> String {
    let slot = appointment.slot_details();
    let line = format!(
        "{}  {}  {}  {}  {} {}  {}",
        appointment.id(),
        status_label(appointment.status),
        appointment
            .user_details()
            .map(|user| user.name.as_str())
            .unwrap_or("Sem nome"),
        appointment
            .service_details()
            .map(|service| service.name.as_str())
            .unwrap_or("Sem serviço"),
        format_date(slot.and_then(|slot| slot.date.as_deref()), DateStyle::Numeric),
        format_time(slot.and_then(|slot| slot.start_time.as_deref())),
        payment_method_label(appointment.payment_method.as_deref()),
    );

    let actions = appointment_actions(appointment);
    if !with_actions || actions.is_empty() {
        return line;
    }

    let actions = actions
        .iter()
        .map(|action| action.label())
        .collect::<Vec<_>>()
        .join(", ");
    format!("{line}  {actions}")
}
