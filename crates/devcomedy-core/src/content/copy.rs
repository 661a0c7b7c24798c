//! Section headings and body copy.

use super::Themed;

// Navbar
pub const BRAND: Themed<&str> = Themed::new("💻 DevComedy", "< /DEV >", "🎭 PunMaster");
pub const NAV_SECTIONS: [(&str, Themed<&str>); 4] = [
    ("about", Themed::new("about", "about", "🤓 About")),
    ("projects", Themed::new("projects", "projects", "🚀 Pro-jects")),
    ("skills", Themed::new("skills", "skills", "⚡ Skill-ionaire")),
    ("contact", Themed::new("contact", "contact", "📞 Con-tact")),
];

// Hero
pub const HERO_TITLE: Themed<&str> = Themed::new(
    "Full Stack Developer",
    "< REALITY.EXE />",
    "🎪 Welcome to the Code Circus!",
);
pub const HERO_TAGLINE: Themed<&str> = Themed::new(
    "Hi! I'm Mohammad Alsanad, a developer who debugs with coffee ☕",
    "> console.log('Hacking reality with code...')",
    "I'm not just coding, I'm Hakla-coding! 🎭",
);
pub const HERO_EXPLORE: Themed<&str> = Themed::new(
    "Explore My Work",
    "> EXECUTE_EXPLORE",
    "🔍 Explore My Puns",
);
pub const HERO_EMOJIS: [&str; 5] = ["💻", "☕", "🚀", "🎯", "⚡"];
pub const HERO_FOOTNOTE: &str = "Powered by coffee and curiosity";

// About
pub const ABOUT_TITLE: Themed<&str> = Themed::new(
    "About Me",
    "< PROFILE.DATA />",
    "🤓 About This Code Comedian",
);
pub const ABOUT_NAME: Themed<&str> = Themed::new(
    "Alsanad Sheikh The Developer",
    "> dev.getName(\"Alsanad Sheikh\")",
    "The Pun-der Developer",
);
pub const ABOUT_ROLE: Themed<&str> = Themed::new(
    "Full Stack AI/ML Developer & Code Enthusiast",
    "System.exe Administrator",
    "Master of Code-dy",
);
pub const ABOUT_TRAITS: [Themed<&str>; 4] = [
    Themed::new("Clean Code Advocate", "Clean Code Advocate", "Pun-ctional Programming Expert"),
    Themed::new("Coffee-Powered Developer", "Coffee-Powered Developer", "Caffeine-Driven Development"),
    Themed::new("Passionate Problem Solver", "Passionate Problem Solver", "Code with Love & Laughs"),
    Themed::new("Performance Optimization", "Performance Optimization", "Lightning-Fast Execution"),
];
pub const ABOUT_BIO: Themed<&str> = Themed::new(
    "I'm a passionate full-stack developer who believes great code should be clean, efficient, and maintainable. When I'm not crafting digital experiences, I'm probably debugging something or learning the latest tech trends. I love turning coffee into code and ideas into reality.",
    "> Passionate about creating digital experiences that push boundaries. Expert in modern web technologies with a focus on performance and user experience. Currently working on making the internet a more interesting place, one commit at a time.",
    "I'm not just a developer, I'm a devel-pun-er! I believe code should be clean, efficient, and full of Easter eggs. When I'm not busy debugging the matrix, you'll find me crafting the perfect programming pun or trying to convince my rubber duck that recursion isn't scary.",
);
pub const TIMELINE_TITLE: Themed<&str> = Themed::new(
    "Journey Timeline",
    "> timeline.log",
    "🎪 My Comedy Timeline",
);
pub const CORE_SKILLS_TITLE: Themed<&str> = Themed::new(
    "Core Skills",
    "> skills.array",
    "⚡ Skill-arious Abilities",
);

// Projects
pub const PROJECTS_TITLE: Themed<&str> = Themed::new(
    "Featured Projects",
    "< PROJECT.FILES />",
    "🚀 Pro-jects that Rock",
);
pub const PROJECTS_SUBTITLE: Themed<&str> = Themed::new(
    "A collection of projects that showcase my passion for creating amazing digital experiences.",
    "> Executing digital solutions that push the boundaries of what's possible.",
    "Projects so good, they'll make your code jealous! Click to flip and discover the puns within.",
);
pub const PROJECTS_MORE: Themed<&str> = Themed::new(
    "Want to see more? Check out my full portfolio on GitHub!",
    "Want to see more? Check out my full portfolio on GitHub!",
    "Want to see more pun-derful projects? Check out my GitHub!",
);
pub const PROJECTS_MORE_BUTTON: Themed<&str> = Themed::new(
    "View All Projects",
    "View All Projects",
    "Git More Projects",
);

// Skills
pub const SKILLS_TITLE: Themed<&str> = Themed::new(
    "⚡ Skills & Superpowers",
    "< SKILLS.exe />",
    "⚡ Skill-ionaire Status",
);
pub const SKILLS_SUBTITLE: Themed<&str> = Themed::new(
    "Click each skill to hear a programmer joke!",
    "RUNTIME: Humor.exe",
    "Click for tech-nical jokes! 🤓",
);
pub const CONFETTI: [&str; 5] = ["🎉", "🎊", "💫", "⭐", "🚀"];

// Contact
pub const CONTACT_TITLE: Themed<&str> = Themed::new(
    "📞 Let's Connect",
    "< CONNECT.protocol />",
    "📞 Con-tact Me",
);
pub const CONTACT_SUBTITLE: Themed<&str> = Themed::new(
    "Send me a message and I'll get back to you!",
    "ESTABLISH COMMUNICATION CHANNEL",
    "Drop me a line, or a pun! 😄",
);
pub const NAME_PLACEHOLDER: Themed<&str> =
    Themed::new("Your name", "ENTER_USERNAME", "Your epic name here...");
pub const EMAIL_PLACEHOLDER: Themed<&str> =
    Themed::new("your@email.com", "user@matrix.net", "your@awesome.email");
pub const MESSAGE_PLACEHOLDER: Themed<&str> = Themed::new(
    "Your message (try typing \"hello world\" or \"I'm bored\"!)",
    "TRANSMIT_MESSAGE_DATA",
    "Tell me something pun-derful!",
);
pub const SEND_LABEL: Themed<&str> = Themed::new("Send Message", "TRANSMIT", "Send-sational!");

// Resume
pub const RESUME_TITLE: Themed<&str> = Themed::new(
    "Download My Resume",
    "< RESUME.DOC />",
    "Download My Resume",
);
pub const RESUME_BLURB: &str =
    "Grab a copy of my latest resume. If you need a different format, feel free to contact me.";
pub const RESUME_PATH: &str = "/assets/resume.pdf";
