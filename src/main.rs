use clap::Parser;
use lead_relay::utils::logger;
use lead_relay::{
    AppConfig, CliConfig, DeliveryClient, DeliveryOutcome, HttpTransport, LeadForm, SubmitEngine,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose, cli.log_json);

    tracing::info!("Starting lead-relay");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match AppConfig::resolve(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration validation failed: {}", e);
            eprintln!("❌ {}", e.user_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(3);
        }
    };
    let whatsapp = config.whatsapp.clone();

    let client = DeliveryClient::new(HttpTransport::new(), config);
    let engine = SubmitEngine::new(client);

    let form = LeadForm {
        nome: cli.nome,
        email: cli.email,
        telefone: cli.telefone,
        interesse: cli.interesse,
        mensagem: cli.mensagem,
    };

    match engine.submit(form).await {
        Ok(DeliveryOutcome::Delivered) => {
            tracing::info!("Lead delivered and confirmed");
            println!("✅ Message sent! We will get back to you within 24 hours.");
        }
        Ok(DeliveryOutcome::Unknown) => {
            // Fallback path: dispatched but unconfirmed. The visitor sees a
            // success message; the logs keep the honest version.
            tracing::warn!("Lead dispatched via fallback; remote result unconfirmed");
            println!("✅ Message sent! We will get back to you within 24 hours.");
        }
        Ok(DeliveryOutcome::Rejected { reason }) => {
            tracing::error!("Webhook rejected the lead: {}", reason);
            eprintln!("❌ Your message could not be sent.");
            print_whatsapp_hint(whatsapp.as_deref());
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("Submission failed: {}", e);
            eprintln!("❌ {}", e.user_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            if !e.is_validation_error() {
                print_whatsapp_hint(whatsapp.as_deref());
            }

            let exit_code = if e.is_validation_error() {
                2
            } else if matches!(e, lead_relay::LeadError::NotConfigured) {
                3
            } else {
                1
            };
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn print_whatsapp_hint(link: Option<&str>) {
    match link {
        Some(link) => eprintln!("💬 Reach us on WhatsApp instead: {}", link),
        None => eprintln!("💬 Reach us on WhatsApp instead."),
    }
}
