//! The fixed example leads the fallback store seeds for a user on first
//! touch, so the dashboard has data to show without any infrastructure.

use crate::{LeadStatus, NewLead};

fn s(value: &str) -> Option<String> {
    Some(value.to_string())
}

fn stack(values: &[&str]) -> Option<Vec<String>> {
    Some(values.iter().map(|v| v.to_string()).collect())
}

/// The sample set, owned by `user_id`.
pub fn sample_leads(user_id: i64) -> Vec<NewLead> {
    vec![
        NewLead {
            name: "Elena Fisher".to_string(),
            first_name: s("Elena"),
            last_name: s("Fisher"),
            title: s("VP of Product"),
            company: "Stripe".to_string(),
            company_logo: s("https://logo.clearbit.com/stripe.com"),
            avatar: s("https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=150&h=150&fit=crop&crop=faces"),
            status: Some(LeadStatus::Enriched),
            confidence: Some(98),
            email: s("elena.fisher@stripe.com"),
            phone: s("+1 (415) 555-0123"),
            linkedin: s("linkedin.com/in/elenafisher"),
            location: s("San Francisco, CA"),
            tech_stack: stack(&["React", "Ruby on Rails", "AWS", "Linear"]),
            ai_insight: s("Elena recently posted about API infrastructure scaling. She is actively hiring for product roles."),
            mutual_connection: s("Sarah Jenkins"),
            user_id,
        },
        NewLead {
            name: "David Chen".to_string(),
            first_name: s("David"),
            last_name: s("Chen"),
            title: s("Head of Engineering"),
            company: "Vercel".to_string(),
            company_logo: s("https://logo.clearbit.com/vercel.com"),
            avatar: s("https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=150&h=150&fit=crop&crop=faces"),
            status: Some(LeadStatus::Enriched),
            confidence: Some(94),
            email: s("david@vercel.com"),
            linkedin: s("linkedin.com/in/davidchen"),
            location: s("Remote"),
            tech_stack: stack(&["Next.js", "Turbo", "Edge Functions"]),
            ai_insight: s("Frequent speaker at Next.js Conf. Recently published a blog post on edge computing performance."),
            mutual_connection: s("Guillermo Rauch"),
            user_id,
            ..Default::default()
        },
        NewLead {
            name: "Sarah Miller".to_string(),
            first_name: s("Sarah"),
            last_name: s("Miller"),
            title: s("Chief Revenue Officer"),
            company: "Linear".to_string(),
            company_logo: s("https://logo.clearbit.com/linear.app"),
            avatar: s("https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=150&h=150&fit=crop&crop=faces"),
            status: Some(LeadStatus::Processing),
            confidence: Some(45),
            location: s("New York, NY"),
            user_id,
            ..Default::default()
        },
        NewLead {
            name: "James Wilson".to_string(),
            first_name: s("James"),
            last_name: s("Wilson"),
            title: s("Founder"),
            company: "Unknown Stealth".to_string(),
            avatar: s("https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=150&h=150&fit=crop&crop=faces"),
            status: Some(LeadStatus::Failed),
            confidence: Some(12),
            ai_insight: s("Company website appears to be down or parked. No recent LinkedIn activity found."),
            user_id,
            ..Default::default()
        },
        NewLead {
            name: "Michael Chang".to_string(),
            first_name: s("Michael"),
            last_name: s("Chang"),
            title: s("Director of Sales"),
            company: "Retool".to_string(),
            company_logo: s("https://logo.clearbit.com/retool.com"),
            avatar: s("https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=150&h=150&fit=crop&crop=faces"),
            status: Some(LeadStatus::Enriched),
            confidence: Some(88),
            email: s("michael@retool.com"),
            linkedin: s("linkedin.com/in/mchang"),
            location: s("San Francisco, CA"),
            tech_stack: stack(&["Retool", "Postgres", "Salesforce"]),
            ai_insight: s("Recently promoted from Senior Manager. Hiring for 3 AE roles."),
            user_id,
            ..Default::default()
        },
        NewLead {
            name: "Amanda Torres".to_string(),
            first_name: s("Amanda"),
            last_name: s("Torres"),
            title: s("CTO"),
            company: "Supabase".to_string(),
            company_logo: s("https://logo.clearbit.com/supabase.com"),
            avatar: s("https://images.unsplash.com/photo-1534528741775-53994a69daeb?w=150&h=150&fit=crop&crop=faces"),
            status: Some(LeadStatus::Enriched),
            confidence: Some(96),
            email: s("amanda@supabase.io"),
            linkedin: s("linkedin.com/in/amandatorres"),
            location: s("Singapore"),
            tech_stack: stack(&["Postgres", "Elixir", "Go"]),
            ai_insight: s("Active contributor to open source Postgres extensions."),
            user_id,
            ..Default::default()
        },
        NewLead {
            name: "Robert Fox".to_string(),
            first_name: s("Robert"),
            last_name: s("Fox"),
            title: s("VP Marketing"),
            company: "Figma".to_string(),
            company_logo: s("https://logo.clearbit.com/figma.com"),
            avatar: s("https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=150&h=150&fit=crop&crop=faces"),
            status: Some(LeadStatus::Pending),
            confidence: Some(0),
            user_id,
            ..Default::default()
        },
        NewLead {
            name: "Lisa Wong".to_string(),
            first_name: s("Lisa"),
            last_name: s("Wong"),
            title: s("Product Designer"),
            company: "Airbnb".to_string(),
            company_logo: s("https://logo.clearbit.com/airbnb.com"),
            avatar: s("https://images.unsplash.com/photo-1517841905240-472988babdf9?w=150&h=150&fit=crop&crop=faces"),
            status: Some(LeadStatus::Enriched),
            confidence: Some(92),
            email: s("lisa.wong@airbnb.com"),
            linkedin: s("linkedin.com/in/lisawongdesign"),
            location: s("Los Angeles, CA"),
            ai_insight: s("Portfolio features extensive work on design systems."),
            user_id,
            ..Default::default()
        },
    ]
}
