//! Prompt text for the three content streams.
//!
//! Each stream sends a fixed system prompt that pins the JSON shape of the
//! answer, and a user prompt built from the [`AppInput`].
use chrono::NaiveDate;
use std::fmt::Write;

use super::input::AppInput;

const JSON_ONLY: &str = "Return ONLY valid JSON with no markdown formatting or code blocks.";

pub const LANDING_PAGE_SYSTEM: &str = r#"You are an expert web designer and conversion copywriter for SaaS and technology products.

Generate landing page content that is conversion-focused, states a clear value proposition, reads as modern and professional, speaks to the target audience and can be shipped as-is.

Respond with valid JSON matching exactly this structure:
{
  "hero": { "headline": string, "subheadline": string, "cta": string },
  "features": [{ "title": string, "description": string, "icon": string }],
  "benefits": [{ "title": string, "description": string }],
  "howItWorks": [{ "step": number, "title": string, "description": string }],
  "testimonials": [{ "name": string, "role": string, "content": string, "avatar": string }],
  "cta": { "headline": string, "description": string, "buttonText": string },
  "footer": { "links": [{ "category": string, "items": string[] }] },
  "reactCode": string,
  "htmlCode": string
}"#;

pub const PITCH_DECK_SYSTEM: &str = r#"You are a startup advisor who has helped many companies prepare investor pitch decks.

Create a pitch deck that follows the formats investors expect, uses realistic market figures, tells one coherent story and answers the usual investor concerns in plain language.

Respond with valid JSON matching exactly this structure:
{
  "slides": [{
    "slideNumber": number,
    "title": string,
    "content": string[],
    "speakerNotes": string,
    "layout": "title" | "bullets" | "two-column" | "image-text" | "chart"
  }],
  "metadata": {
    "title": string,
    "subtitle": string,
    "author": string,
    "date": string
  }
}"#;

pub const MARKETING_SYSTEM: &str = r#"You are a social media marketing strategist who knows the conventions of each platform and writes copy that converts.

Create launch content that fits each platform's tone and format, respects its character limits, carries hashtags and calls to action, and can be posted immediately.

Respond with valid JSON matching exactly this structure:
{
  "instagram": {
    "platform": "Instagram",
    "posts": [{ "content": string, "hashtags": string[], "imagePrompt": string, "characterCount": number }]
  },
  "twitter": {
    "platform": "Twitter",
    "posts": [{ "content": string, "hashtags": string[], "characterCount": number }]
  },
  "facebook": {
    "platform": "Facebook",
    "posts": [{ "content": string, "hashtags": string[], "imagePrompt": string }]
  },
  "linkedin": {
    "platform": "LinkedIn",
    "posts": [{ "content": string, "hashtags": string[] }]
  },
  "googleAds": [
    {
      "headline1": string,
      "headline2": string,
      "headline3": string,
      "description1": string,
      "description2": string
    }
  ],
  "emailTemplate": {
    "subject": string,
    "preheader": string,
    "body": string
  }
}"#;

/// Bold-labelled fields shared by every user prompt.
fn write_brief(prompt: &mut String, input: &AppInput) {
    let features: Vec<&str> = input.features().collect();
    let _ = writeln!(prompt, "**App Name:** {}", input.app_name.trim());
    let _ = writeln!(prompt, "**Tagline:** {}", input.tagline.trim());
    let _ = writeln!(prompt, "**Target Audience:** {}", input.target_audience.trim());
    let _ = writeln!(prompt, "**Problem Solved:** {}", input.problem_solved.trim());
    let _ = writeln!(prompt, "**Key Features:** {}", features.join(", "));
}

fn write_competitors(prompt: &mut String, input: &AppInput) {
    if let Some(competitors) = input.competitors() {
        let _ = writeln!(prompt, "**Competitors:** {}", competitors);
    }
}

pub fn landing_page_user(input: &AppInput) -> String {
    let colors = input.brand_colors();
    let mut prompt = String::from("Generate a complete landing page for this app:\n\n");
    write_brief(&mut prompt, input);
    let _ = writeln!(
        prompt,
        "**Brand Colors:** Primary: {}, Secondary: {}, Accent: {}",
        colors.primary, colors.secondary, colors.accent
    );
    let _ = writeln!(prompt, "**Style Preference:** {}", input.style_preference);
    write_competitors(&mut prompt, input);

    prompt.push_str(
        "\nInclude these sections:\n\n\
         1. **Hero**: headline of 8-12 words, subheadline of 15-25 words, CTA button text\n\
         2. **Features**: 5 features with title, a 30-50 word description and a lucide-react icon name (for example \"Zap\", \"Users\", \"Shield\")\n\
         3. **Benefits**: 4 benefits describing outcomes rather than features\n\
         4. **How It Works**: a 3-4 step user journey\n\
         5. **Testimonials**: 3 placeholder testimonials with name, role and feedback\n\
         6. **Final CTA**: closing headline and description\n\
         7. **Footer**: links grouped into Product, Company, Resources and Legal\n\n\
         Also include:\n\
         - **reactCode**: a production-ready React component styled with Tailwind CSS using the brand colors\n\
         - **htmlCode**: a standalone HTML page with inline CSS using the brand colors\n\n",
    );
    prompt.push_str(JSON_ONLY);
    prompt
}

pub fn pitch_deck_user(input: &AppInput, today: NaiveDate) -> String {
    let app_name = input.app_name.trim();
    let mut prompt = String::from("Create a professional pitch deck for this startup:\n\n");
    write_brief(&mut prompt, input);
    let _ = writeln!(prompt, "**Funding Stage:** {}", input.funding_stage());
    write_competitors(&mut prompt, input);

    let _ = write!(
        prompt,
        "\nUse 10-12 slides in this order:\n\n\
         1. **Title**: company name, tagline and contact details\n\
         2. **Problem**: the market pain (3-4 bullets)\n\
         3. **Solution**: how {app_name} solves it (3-4 bullets)\n\
         4. **Product/Demo**: key features and how it works\n\
         5. **Market Opportunity**: TAM, SAM and SOM with realistic numbers\n\
         6. **Business Model**: pricing and revenue streams\n\
         7. **Traction/Roadmap**: current status and upcoming milestones\n\
         8. **Competition**: landscape and differentiation\n\
         9. **Go-to-Market**: customer acquisition plan\n\
         10. **Team**: founder and team highlights (placeholder)\n\
         11. **Financial Projections**: 3-year revenue projections\n\
         12. **Ask/Use of Funds**: amount raised and allocation\n\n\
         Every slide needs a title, 3-5 short bullets, speaker notes with what to say, and a layout.\n\n\
         Use realistic figures and make the case compelling for investors.\n\n"
    );
    prompt.push_str(JSON_ONLY);
    let _ = write!(prompt, " Set the date to \"{}\".", today.format("%Y-%m-%d"));
    prompt
}

pub fn marketing_user(input: &AppInput) -> String {
    let mut prompt = String::from("Create a complete social media launch campaign for:\n\n");
    write_brief(&mut prompt, input);
    write_competitors(&mut prompt, input);

    prompt.push_str(
        "\nGenerate content for each platform:\n\n\
         **INSTAGRAM (5 posts):** announcement, features, benefits, testimonial and CTA posts; captions up to 2200 characters; 5-10 hashtags each; an image prompt and characterCount for every post\n\n\
         **TWITTER/X (5 posts):** a launch thread of at most 280 characters per post with feature highlights, hooks, at most 3 hashtags, clear CTAs and characterCount\n\n\
         **FACEBOOK (3 ad variations):** problem-focused, solution-focused and benefit-focused angles, each with an image prompt\n\n\
         **LINKEDIN (3 posts):** professional tone with thought leadership, industry insight and a personal story\n\n\
         **GOOGLE ADS (3 variations):** headline1, headline2 and headline3 of at most 30 characters; description1 and description2 of at most 90 characters\n\n\
         **EMAIL LAUNCH TEMPLATE:** subject of at most 50 characters, preheader of at most 100 characters, full HTML body with styling\n\n\
         Keep everything on-brand and ready to use.\n\n",
    );
    prompt.push_str(JSON_ONLY);
    prompt
}
