use shaper_core::{AppViewModel, Phase};
use shaper_engine::ServiceSettings;

pub fn banner(settings: &ServiceSettings) {
    println!("Link Shaper — shorten long URLs via {}", settings.base_url);
    println!("Type a URL to shorten it. Commands: :copy  :new  :quit");
}

pub fn render(view: &AppViewModel) {
    match view.phase {
        Phase::Submitting => {
            println!("Shortening...");
            return;
        }
        Phase::Success => {
            if let Some(link) = &view.link {
                println!("URL shortened successfully!");
                println!("  Original: {}", link.original_url);
                println!("  Short:    {}", link.short_url);
                if view.copied {
                    println!("Copied to clipboard!");
                } else {
                    println!("Use :copy to copy the short URL, :new to start over.");
                }
            }
            return;
        }
        Phase::Idle | Phase::Error => {}
    }

    if let Some(message) = &view.validation_error {
        println!("{}", message);
    } else if let Some(message) = &view.request_error {
        println!("{}", message);
    }
    print_prompt();
}

fn print_prompt() {
    println!("Enter your long URL:");
}
