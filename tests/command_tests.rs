use card_price_bot::message::InboundMessage;
use card_price_bot::services::commands::{
    Command, CommandProcessor, INVALID_COMMAND_REPLY, PRICE_ERROR_REPLY, detect_command, format_quote,
};
use card_price_bot::services::pricing::{PriceQuote, PricingClient};
use card_price_bot::services::telegram::TelegramClient;
use mockito::Matcher;
use reqwest::{Client, Url};

#[test]
fn test_detect_command() {
    assert_eq!(detect_command("/priceprinttag LOB-001"), Command::PricePrintTag("LOB-001"));
    assert_eq!(detect_command("/PricePrintTag sdk-001"), Command::PricePrintTag("sdk-001"));
    assert_eq!(
        detect_command("/priceprinttag LOB-001 ignored words"),
        Command::PricePrintTag("LOB-001")
    );
    assert_eq!(detect_command("/priceprinttag@CardPriceBot LOB-001"), Command::PricePrintTag("LOB-001"));
    assert_eq!(detect_command("/priceprinttag"), Command::MissingPrintTag);
    assert_eq!(detect_command("/priceprinttag "), Command::MissingPrintTag);
    assert_eq!(detect_command("/price LOB-001"), Command::Unknown);
    assert_eq!(detect_command(""), Command::Unknown);
}

#[test]
fn test_command_anywhere_in_text() {
    // The second token is taken even when the command is not the first word.
    assert_eq!(detect_command("hey /priceprinttag LOB-001"), Command::PricePrintTag("/priceprinttag"));
}

#[test]
fn test_only_spaces_separate_tokens() {
    assert_eq!(detect_command("/priceprinttag\tLOB-001"), Command::MissingPrintTag);
}

#[test]
fn test_format_quote() {
    let quote = PriceQuote { high: 10.5, average: 7.25, low: 3.0 };
    assert_eq!(format_quote(&quote), "Prices\nHigh :$10.50\nAverage: $7.25\nLow: $3.00");
}

fn processor(pricing_url: &str, telegram_url: &str) -> CommandProcessor {
    let http = Client::new();
    CommandProcessor::new(
        PricingClient::new(http.clone(), Url::parse(pricing_url).unwrap()),
        TelegramClient::new(http, Url::parse(telegram_url).unwrap(), "t"),
    )
}

#[tokio::test]
async fn test_chat_id_is_kept_in_every_branch() {
    let mut pricing = mockito::Server::new_async().await;
    let mut telegram = mockito::Server::new_async().await;

    let _lookup = pricing
        .mock("GET", "/api/price_for_print_tag/LOB-001")
        .with_status(200)
        .with_body(r#"{"status":"fail"}"#)
        .create_async()
        .await;
    let send = telegram
        .mock("POST", "/bott/sendMessage")
        .match_body(Matcher::PartialJsonString(r#"{"chat_id":42}"#.to_string()))
        .with_status(200)
        .expect(3)
        .create_async()
        .await;

    let commands = processor(&pricing.url(), &telegram.url());
    for (text, expected) in [
        ("hello", INVALID_COMMAND_REPLY),
        ("/priceprinttag", PRICE_ERROR_REPLY),
        ("/priceprinttag LOB-001", PRICE_ERROR_REPLY),
    ] {
        let reply = commands
            .handle(InboundMessage { chat_id: 42, text: text.to_string() })
            .await
            .unwrap();
        assert_eq!(reply.chat_id, 42);
        assert_eq!(reply.text, expected);
    }
    send.assert_async().await;
}

#[tokio::test]
async fn test_reply_failure_is_returned() {
    let mut telegram = mockito::Server::new_async().await;
    let _send = telegram
        .mock("POST", "/bott/sendMessage")
        .with_status(500)
        .create_async()
        .await;

    let commands = processor("http://127.0.0.1:1", &telegram.url());
    let result = commands
        .handle(InboundMessage { chat_id: 7, text: "nope".to_string() })
        .await;
    assert!(result.is_err());
}
