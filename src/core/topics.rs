//! The fixed "applications of electromagnetism" catalog behind the
//! content gallery. Created at compile time, never mutated, never
//! fetched; display order equals catalog order.

/// One entry of the content gallery.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Topic {
    /// Stable identifier, also used as the card's DOM id.
    pub id: &'static str,
    pub title: &'static str,
    /// Short lead paragraph.
    pub description: &'static str,
    /// Longer supporting text.
    pub details: &'static str,
    /// Icon name from `ui::icon::icons`.
    pub icon: &'static str,
    /// Accent color (hex) tinting the card border, icon, and button.
    pub accent: &'static str,
}

/// Entrance animation base delay in milliseconds.
pub const ENTRANCE_BASE_MS: u32 = 800;

/// Additional entrance delay per card index in milliseconds.
pub const ENTRANCE_STEP_MS: u32 = 100;

/// Stagger delay for the card at `index`. Cosmetic only: it shapes
/// the entrance animation, not the rendered order.
pub fn entrance_delay_ms(index: usize) -> u32 {
    ENTRANCE_BASE_MS + ENTRANCE_STEP_MS * index as u32
}

/// The gallery catalog, in display order.
pub static TOPICS: [Topic; 6] = [
    Topic {
        id: "radio",
        title: "Radio Communications",
        description: "Radio waves enable wireless communication across long distances.",
        details: "Frequencies from 3 kHz to 300 GHz carry AM/FM radio, television, \
                  and mobile communications.",
        icon: "radio",
        accent: "#3B82F6",
    },
    Topic {
        id: "wifi",
        title: "WiFi & Bluetooth",
        description: "Wireless technologies that move data over microwaves.",
        details: "WiFi operates at 2.4 GHz and 5 GHz, while Bluetooth uses 2.4 GHz \
                  with frequency hopping.",
        icon: "wifi",
        accent: "#10B981",
    },
    Topic {
        id: "mobile",
        title: "Mobile Telephony",
        description: "Cell phones rely on electromagnetic waves for communication.",
        details: "From 1G to 5G, each generation uses different frequencies and \
                  modulation techniques.",
        icon: "phone",
        accent: "#8B5CF6",
    },
    Topic {
        id: "medical",
        title: "Medical Applications",
        description: "X-rays, magnetic resonance imaging, and other medical equipment.",
        details: "X-rays let us see inside the body, while MRI relies on intense \
                  magnetic fields.",
        icon: "medical",
        accent: "#EF4444",
    },
    Topic {
        id: "power",
        title: "Power Transmission",
        description: "Transmission lines carry electrical energy across long distances.",
        details: "Frequencies of 50-60 Hz are used to distribute electrical energy \
                  through grids.",
        icon: "bolt",
        accent: "#F59E0B",
    },
    Topic {
        id: "satellite",
        title: "Satellite Communications",
        description: "Satellites provide global communications and GPS.",
        details: "Microwaves and higher frequencies carry communication through space.",
        icon: "satellite",
        accent: "#06B6D4",
    },
];
