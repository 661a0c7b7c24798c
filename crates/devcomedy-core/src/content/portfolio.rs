//! Projects, skills, timeline and social links.

use super::Themed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: Themed<&'static str>,
    pub description: Themed<&'static str>,
    pub technologies: &'static [&'static str],
    pub github_url: &'static str,
    pub emoji: &'static str,
    /// Shown on the back of the flipped card
    pub joke: &'static str,
}

const fn described(plain: &'static str, punny: &'static str) -> Themed<&'static str> {
    Themed::new(plain, plain, punny)
}

pub const PROJECTS: [Project; 6] = [
    Project {
        title: Themed::new("TECHNEX-25 Ticketing System", "TICKET.SYS", "Wild About Tickets"),
        description: described(
            "Full-stack Django + AI chatbot platform for booking wildlife sanctuary and monument tickets.",
            "Book your next wildlife adventure without the monkey business—our chatbot handles it all!",
        ),
        technologies: &["Django", "MySQL", "Langflow", "JavaScript", "HTML/CSS"],
        github_url: "https://github.com/Alsanad-Opium/Ticketing_system",
        emoji: "🎟️",
        joke: "Why did the chatbot book a safari? It wanted to debug in the wild!",
    },
    Project {
        title: Themed::new("Drag-DROP DAG Pipeline Builder", "PIPELINE.EXE", "Pipe Dream Machine"),
        description: described(
            "Interactive pipeline builder using ReactFlow + FastAPI with DAG validation.",
            "Design data flows so smooth, they should come with a jazz soundtrack.",
        ),
        technologies: &["ReactFlow", "FastAPI", "NetworkX", "JavaScript", "Python"],
        github_url: "https://github.com/Alsanad-Opium/Drag-DROP_DAG_pipeline",
        emoji: "🔗",
        joke: "I told my pipeline a joke... now it's streaming with laughter!",
    },
    Project {
        title: Themed::new("Chef-Gemini", "CHEF.GEMINI", "Chef's Kiss AI"),
        description: described(
            "AI-powered recipe generator using Google Gemini API for text & image generation.",
            "Give me your fridge contents, and I'll cook up ideas hotter than your stove!",
        ),
        technologies: &["Vite", "JavaScript", "Google Gemini API", "HTML/CSS"],
        github_url: "https://github.com/Alsanad-Opium/chef-gemini",
        emoji: "🍳",
        joke: "Why don't AI chefs ever panic? They always keep their cool under pressure.",
    },
    Project {
        title: Themed::new("QuickSign App", "SIGN.APP", "Sign Here, Please!"),
        description: described(
            "Digital signature app with stroke customization and save/download features.",
            "Draw your autograph faster than a celebrity dodging paparazzi.",
        ),
        technologies: &["JavaScript", "HTML/CSS", "Canvas API"],
        github_url: "https://github.com/Alsanad-Opium/Quicksign_app",
        emoji: "✍️",
        joke: "Why did the pen refuse to work? It didn't sign up for this.",
    },
    Project {
        title: Themed::new("Simple Calculator Website", "CALC.EXE", "Count On Me"),
        description: described(
            "Flask-based calculator with responsive UI and backend validation.",
            "Crunching numbers like they're potato chips-can't stop, won't stop.",
        ),
        technologies: &["Flask", "JavaScript", "HTML/CSS"],
        github_url: "https://github.com/Alsanad-Opium/Simple-Calculator-website",
        emoji: "🧮",
        joke: "Why did the calculator break up? It couldn't count on its partner.",
    },
    Project {
        title: Themed::new("Typing Speed App", "TYPE.SPD", "Type Like The Wind"),
        description: described(
            "Frontend typing speed test with category-based filtering and dynamic scoring.",
            "Test your typing skills before your keyboard files a complaint.",
        ),
        technologies: &["JavaScript", "HTML/CSS"],
        github_url: "https://github.com/Alsanad-Opium/TypingSpeed_app",
        emoji: "⌨️",
        joke: "My typing speed is like a race car... until autocorrect crashes it.",
    },
];

/// A clickable skill badge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    pub joke: &'static str,
}

pub const SKILLS: [Skill; 6] = [
    Skill {
        name: "Frontend Development",
        icon: "💻",
        joke: "React, JavaScript, HTML, CSS & Tailwind — making pixels behave since forever.",
    },
    Skill {
        name: "Backend Development",
        icon: "🗄️",
        joke: "Flask, Python, and C++ — keeping the server side spicy.",
    },
    Skill {
        name: "Databases",
        icon: "💾",
        joke: "SQL, PostgreSQL, and MongoDB — my data always has a safe home.",
    },
    Skill {
        name: "Data Science & AI",
        icon: "⚡",
        joke: "Pandas, NumPy, Scikit-learn, spaCy — teaching machines to think-ish.",
    },
    Skill {
        name: "Version Control",
        icon: "🌿",
        joke: "Git — my personal time machine for code disasters.",
    },
    Skill {
        name: "Creative & Team Skills",
        icon: "💡",
        joke: "Project ideation, problem solving, pitching, collaboration — and coffee-powered optimism.",
    },
];

/// Skill bar in the About section: (name, level percent)
pub const CORE_SKILLS: [(&str, u8); 5] = [
    ("React", 95),
    ("Python", 90),
    ("AI/ML", 80),
    ("TypeScript", 85),
    ("Node.js", 80),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimelineEntry {
    pub year: &'static str,
    pub event: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
}

pub const TIMELINE: [TimelineEntry; 4] = [
    TimelineEntry {
        year: "2023",
        event: "SSC Graduation",
        emoji: "🎓",
        description: "Completed SSC with 94% marks",
    },
    TimelineEntry {
        year: "2023-2026",
        event: "Diploma in AIML",
        emoji: "🤖",
        description: "Pursuing 3rd year in Artificial Intelligence and Machine Learning",
    },
    TimelineEntry {
        year: "2024 Summer",
        event: "Internship @ ITnetworkz Infotech",
        emoji: "💼",
        description: "Worked on practical projects and industry-focused learning",
    },
    TimelineEntry {
        year: "2023-2025",
        event: "Hackathon Participation",
        emoji: "⚡",
        description: "Participated in multiple hackathons, enhancing problem-solving and teamwork skills",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Social {
    pub name: &'static str,
    pub url: &'static str,
    pub icon: &'static str,
}

pub const SOCIALS: [Social; 2] = [
    Social {
        name: "GitHub",
        url: "https://github.com/Alsanad-Opium",
        icon: "🐙",
    },
    Social {
        name: "LinkedIn",
        url: "https://www.linkedin.com/in/mohammad-alsanad-sheikh-a12818302",
        icon: "💼",
    },
];
