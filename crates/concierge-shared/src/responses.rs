//! Canned responses.
//!
//! Each intent kind maps to a pure function of the knowledge base. Output is
//! trusted markup (see [`crate::markup`]).

use crate::intents::IntentKind;
use crate::knowledge::{day_name, KnowledgeBase};
use crate::markup::{link, mailto_link, page_link, strong, tel_link, BR};

/// Build the reply for a matched intent
pub fn respond(kind: IntentKind, kb: &KnowledgeBase) -> String {
    match kind {
        IntentKind::Booking => booking(kb),
        IntentKind::Hours => hours(kb),
        IntentKind::Menu => menu(kb),
        IntentKind::SignatureFish => format!(
            "Our signature {} is a whole grilled fish, seasoned with West African spices and charcoal-grilled to perfection. It's the dish that put us on the map!",
            strong("Monika Fish")
        ),
        IntentKind::Prawns => format!(
            "Our {} are king prawns marinated in a blend of garlic, ginger, Scotch bonnet, and smoked paprika — then charcoal-grilled. Absolutely delicious!",
            strong("Spiced Charcoal Prawns")
        ),
        IntentKind::Suya => format!(
            "{} is a popular West African street food — spiced grilled meat skewers coated in a peanut-based spice mix (yaji). Smoky, nutty, and full of flavour.",
            strong("Suya")
        ),
        IntentKind::Jollof => format!(
            "Our {} is a classic West African one-pot rice dish cooked in a rich, spiced tomato sauce. It's the perfect side to any of our grilled dishes.",
            strong("Jollof Rice")
        ),
        IntentKind::Location => location(kb),
        IntentKind::Parking => parking(kb),
        IntentKind::Contact => contact(kb),
        IntentKind::PrivateEvents => format!(
            "We'd love to host your event! {}\n\nCall us at {} or email {} to discuss your requirements.",
            kb.venue.capacity,
            strong(&kb.restaurant.phone),
            mailto_link(&kb.restaurant.email)
        ),
        IntentKind::Venue => format!(
            "{}{br}{br}{}{br}{br}Features: {}.",
            kb.venue.description,
            kb.venue.atmosphere,
            kb.venue.features.join(", "),
            br = BR
        ),
        IntentKind::Dietary => format!(
            "{}{br}{br}Our charcoal-grilled dishes are naturally gluten-free. Contact us ahead of your visit if you have specific dietary requirements.",
            kb.menu.dietary,
            br = BR
        ),
        IntentKind::Promotions => format!(
            "{}{br}{br}{}",
            kb.promotion.current,
            page_link(&kb.pages.promotions, "🎁 View Promotions →"),
            br = BR
        ),
        IntentKind::Story => format!(
            "{}{br}{br}{}",
            kb.story.summary,
            page_link(&kb.pages.story, "Read Our Story →"),
            br = BR
        ),
        IntentKind::Gallery => format!(
            "Check out our gallery to see the atmosphere, dishes, and events at {}.{br}{br}{}",
            kb.restaurant.name,
            page_link(&kb.pages.gallery, "View Gallery →"),
            br = BR
        ),
        IntentKind::Greeting => format!(
            "Welcome to {}! 🎉 How can I help you today? I can assist with:\n\n• {} a table\n• {} information\n• {}\n• {}\n• {}",
            kb.restaurant.name,
            strong("Booking"),
            strong("Menu"),
            strong("Opening hours"),
            strong("Location & parking"),
            strong("Events & private dining")
        ),
        IntentKind::Thanks => format!(
            "You're welcome! If you need anything else, just ask. We look forward to seeing you at {}! 🍽️",
            kb.restaurant.name
        ),
        IntentKind::Farewell => format!(
            "Goodbye! We hope to see you at {} soon. Don't forget to {}! 👋",
            kb.restaurant.name,
            link(&kb.restaurant.booking_url, "book your table")
        ),
        IntentKind::Pricing => format!(
            "For detailed pricing, please check our menu:\n{}\n\nWe offer a range of dishes at various price points. For group dining or event pricing, please contact us directly.",
            link(&kb.menu.menu_url, "View Full Menu (PDF) →")
        ),
        IntentKind::Takeaway => format!(
            "For the best experience, we recommend dining with us. Please call {} to ask about current takeaway availability.",
            strong(&kb.restaurant.phone)
        ),
        IntentKind::Wifi => {
            "Please ask your server about Wi-Fi availability when you visit. We'll be happy to help!"
                .to_string()
        }
    }
}

fn booking(kb: &KnowledgeBase) -> String {
    format!(
        "You can book a table online here:\n{}\n\nOr call us at {}.",
        link(&kb.restaurant.booking_url, "Book Now →"),
        strong(&kb.restaurant.phone)
    )
}

fn hours(kb: &KnowledgeBase) -> String {
    let mut out = format!("{}{}", strong("Opening Hours:"), BR);
    for (day, time) in kb.hours.iter() {
        out.push_str(&format!("{}: {}{}", day_name(day), time, BR));
    }
    out
}

fn menu(kb: &KnowledgeBase) -> String {
    let mut out = format!("{}{br}{br}Popular dishes:{br}", strong(&kb.menu.description), br = BR);
    for dish in &kb.menu.highlights {
        out.push_str(&format!("• {}{}", dish, BR));
    }
    out.push_str(BR);
    out.push_str(&link(&kb.menu.menu_url, "View Full Menu (PDF) →"));
    out
}

fn location(kb: &KnowledgeBase) -> String {
    format!(
        "We're at {}.\n\n{}{}{}",
        strong(&kb.restaurant.address),
        link(&kb.parking.google_maps, "📍 Get Google Directions →"),
        BR,
        link(&kb.parking.waze, "📍 Open in Waze →")
    )
}

fn parking(kb: &KnowledgeBase) -> String {
    format!(
        "{}{br}{}{br}{br}{}{br}{}",
        strong("Parking Info:"),
        kb.parking.info,
        link(&kb.parking.waze, "📍 Open in Waze →"),
        link(&kb.parking.google_maps, "🗺️ Google Directions →"),
        br = BR
    )
}

fn contact(kb: &KnowledgeBase) -> String {
    format!(
        "{}{br}📞 Phone: {}{br}✉️ Email: {}{br}📍 Address: {}",
        strong("Contact Us:"),
        tel_link(&kb.restaurant.phone),
        mailto_link(&kb.restaurant.email),
        kb.restaurant.address,
        br = BR
    )
}

/// Reply when no intent scores above zero
pub fn fallback(kb: &KnowledgeBase) -> String {
    format!(
        "I'm not sure about that, but I'd be happy to help with:\n\n\
         • {} – reserve a table\n\
         • {} – what we serve\n\
         • {} – when we're open\n\
         • {} – how to find us\n\
         • {} – where to park\n\
         • {} – get in touch\n\n\
         Or call us at {} for anything else!",
        strong("Booking"),
        strong("Menu"),
        strong("Hours"),
        strong("Location"),
        strong("Parking"),
        strong("Contact"),
        strong(&kb.restaurant.phone)
    )
}

/// First message of every chat session
pub fn welcome(kb: &KnowledgeBase) -> String {
    format!(
        "Welcome to {}! 🎉{br}{br}\
         I can help you with:{br}\
         • Booking a table{br}\
         • Menu & dishes{br}\
         • Opening hours{br}\
         • Location & parking{br}\
         • Events & private dining{br}{br}\
         What would you like to know?",
        strong(&kb.restaurant.name),
        br = BR
    )
}
