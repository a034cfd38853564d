//! Standard code assignments from WAP-230-WSP and the OMA MMS encapsulation.
//!
//! Parameter tokens that changed encoding between WSP versions carry the
//! version after a comma.

use super::Table;

type Entries = &'static [(u32, &'static str)];

pub(super) const ALL: &[(Table, Entries)] = &[
    (Table::Charset, CHARSET),
    (Table::HeaderField, HEADER_FIELD),
    (Table::ContentType, CONTENT_TYPE),
    (Table::DeliveryReport, YES_NO),
    (Table::MessageClass, MESSAGE_CLASS),
    (Table::MessageType, MESSAGE_TYPE),
    (Table::Priority, PRIORITY),
    (Table::ReadReply, YES_NO),
    (Table::ReportAllowed, YES_NO),
    (Table::ResponseStatus, RESPONSE_STATUS),
    (Table::ParameterField, PARAMETER_FIELD),
    (Table::ParameterWellKnown, PARAMETER_WELLKNOWN),
];

const CHARSET: Entries = &[
    (3, "US-ASCII"),
    (4, "ISO-8859-1"),
    (5, "ISO-8859-2"),
    (6, "ISO-8859-3"),
    (7, "ISO-8859-4"),
    (8, "ISO-8859-5"),
    (9, "ISO-8859-6"),
    (10, "ISO-8859-7"),
    (11, "ISO-8859-8"),
    (12, "ISO-8859-9"),
    (13, "ISO-8859-10"),
    (17, "Shift_JIS"),
    (18, "EUC-JP"),
    (36, "KS_C_5601-1987"),
    (38, "EUC-KR"),
    (39, "ISO-2022-JP"),
    (106, "UTF-8"),
    (109, "ISO-8859-13"),
    (111, "ISO-8859-15"),
    (113, "GBK"),
    (114, "GB18030"),
    (1000, "ISO-10646-UCS-2"),
    (1013, "UTF-16BE"),
    (1014, "UTF-16LE"),
    (1015, "UTF-16"),
    (2025, "GB2312"),
    (2026, "Big5"),
    (2084, "KOI8-R"),
    (2252, "windows-1252"),
];

const HEADER_FIELD: Entries = &[
    (0x01, "Bcc"),
    (0x02, "Cc"),
    (0x03, "Content-Location"),
    (0x04, "Content-Type"),
    (0x05, "Date"),
    (0x06, "Delivery-Report"),
    (0x07, "Delivery-Time"),
    (0x08, "Expiry"),
    (0x09, "From"),
    (0x0A, "Message-Class"),
    (0x0B, "Message-ID"),
    (0x0C, "Message-Type"),
    (0x0D, "MMS-Version"),
    (0x0E, "Message-Size"),
    (0x0F, "Priority"),
    (0x10, "Read-Reply"),
    (0x11, "Report-Allowed"),
    (0x12, "Response-Status"),
    (0x13, "Response-Text"),
    (0x14, "Sender-Visibility"),
    (0x15, "Status"),
    (0x16, "Subject"),
    (0x17, "To"),
    (0x18, "Transaction-Id"),
    (0x19, "Retrieve-Status"),
    (0x1A, "Retrieve-Text"),
    (0x1B, "Read-Status"),
    (0x1C, "Reply-Charging"),
    (0x1D, "Reply-Charging-Deadline"),
    (0x1E, "Reply-Charging-ID"),
    (0x1F, "Reply-Charging-Size"),
    (0x20, "Previously-Sent-By"),
    (0x21, "Previously-Sent-Date"),
];

const CONTENT_TYPE: Entries = &[
    (0x00, "*/*"),
    (0x01, "text/*"),
    (0x02, "text/html"),
    (0x03, "text/plain"),
    (0x04, "text/x-hdml"),
    (0x05, "text/x-ttml"),
    (0x06, "text/x-vCalendar"),
    (0x07, "text/x-vCard"),
    (0x08, "text/vnd.wap.wml"),
    (0x09, "text/vnd.wap.wmlscript"),
    (0x0A, "text/vnd.wap.wta-event"),
    (0x0B, "multipart/*"),
    (0x0C, "multipart/mixed"),
    (0x0D, "multipart/form-data"),
    (0x0E, "multipart/byteranges"),
    (0x0F, "multipart/alternative"),
    (0x10, "application/*"),
    (0x11, "application/java-vm"),
    (0x12, "application/x-www-form-urlencoded"),
    (0x13, "application/x-hdmlc"),
    (0x14, "application/vnd.wap.wmlc"),
    (0x15, "application/vnd.wap.wmlscriptc"),
    (0x16, "application/vnd.wap.wta-eventc"),
    (0x17, "application/vnd.wap.uaprof"),
    (0x18, "application/vnd.wap.wtls-ca-certificate"),
    (0x19, "application/vnd.wap.wtls-user-certificate"),
    (0x1A, "application/x-x509-ca-cert"),
    (0x1B, "application/x-x509-user-cert"),
    (0x1C, "image/*"),
    (0x1D, "image/gif"),
    (0x1E, "image/jpeg"),
    (0x1F, "image/tiff"),
    (0x20, "image/png"),
    (0x21, "image/vnd.wap.wbmp"),
    (0x22, "application/vnd.wap.multipart.*"),
    (0x23, "application/vnd.wap.multipart.mixed"),
    (0x24, "application/vnd.wap.multipart.form-data"),
    (0x25, "application/vnd.wap.multipart.byteranges"),
    (0x26, "application/vnd.wap.multipart.alternative"),
    (0x27, "application/xml"),
    (0x28, "text/xml"),
    (0x29, "application/vnd.wap.wbxml"),
    (0x2A, "application/x-x968-cross-cert"),
    (0x2B, "application/x-x968-ca-cert"),
    (0x2C, "application/x-x968-user-cert"),
    (0x2D, "text/vnd.wap.si"),
    (0x2E, "application/vnd.wap.sic"),
    (0x2F, "text/vnd.wap.sl"),
    (0x30, "application/vnd.wap.slc"),
    (0x31, "text/vnd.wap.co"),
    (0x32, "application/vnd.wap.coc"),
    (0x33, "application/vnd.wap.multipart.related"),
    (0x34, "application/vnd.wap.sia"),
    (0x35, "text/vnd.wap.connectivity-xml"),
    (0x36, "application/vnd.wap.connectivity-wbxml"),
    (0x37, "application/pkcs7-mime"),
    (0x38, "application/vnd.wap.hashed-certificate"),
    (0x39, "application/vnd.wap.signed-certificate"),
    (0x3A, "application/vnd.wap.cert-response"),
    (0x3B, "application/xhtml+xml"),
    (0x3C, "application/wml+xml"),
    (0x3D, "text/css"),
    (0x3E, "application/vnd.wap.mms-message"),
    (0x3F, "application/vnd.wap.rollover-certificate"),
    (0x40, "application/vnd.wap.locc+wbxml"),
    (0x41, "application/vnd.wap.loc+xml"),
];

const YES_NO: Entries = &[(128, "Yes"), (129, "No")];

const MESSAGE_CLASS: Entries = &[
    (128, "Personal"),
    (129, "Advertisement"),
    (130, "Informational"),
    (131, "Auto"),
];

const MESSAGE_TYPE: Entries = &[
    (128, "M-Send-Req"),
    (129, "M-Send-Conf"),
    (130, "M-Notification-Ind"),
    (131, "M-Notifyresp-Ind"),
    (132, "M-Retrieve-Conf"),
    (133, "M-Acknowledge-Ind"),
    (134, "M-Delivery-Ind"),
    (135, "M-Read-Rec-Ind"),
    (136, "M-Read-Orig-Ind"),
    (137, "M-Forward-Req"),
    (138, "M-Forward-Conf"),
];

const PRIORITY: Entries = &[(128, "Low"), (129, "Normal"), (130, "High")];

const RESPONSE_STATUS: Entries = &[
    (128, "Ok"),
    (129, "Error-Unspecified"),
    (130, "Error-Service-Denied"),
    (131, "Error-Message-Format-Corrupt"),
    (132, "Error-Sending-Address-Unresolved"),
    (133, "Error-Message-Not-Found"),
    (134, "Error-Network-Problem"),
    (135, "Error-Content-Not-Accepted"),
    (136, "Error-Unsupported-Message"),
];

const PARAMETER_FIELD: Entries = &[
    (0x00, "Accept"),
    (0x01, "Accept-Charset"),
    (0x02, "Accept-Encoding"),
    (0x03, "Accept-Language"),
    (0x04, "Accept-Ranges"),
    (0x05, "Age"),
    (0x06, "Allow"),
    (0x07, "Authorization"),
    (0x08, "Cache-Control"),
    (0x09, "Connection"),
    (0x0A, "Content-Base"),
    (0x0B, "Content-Encoding"),
    (0x0C, "Content-Language"),
    (0x0D, "Content-Length"),
    (0x0E, "Content-Location"),
    (0x0F, "Content-MD5"),
    (0x10, "Content-Range"),
    (0x11, "Content-Type"),
    (0x12, "Date"),
    (0x13, "Etag"),
    (0x14, "Expires"),
    (0x15, "From"),
    (0x16, "Host"),
    (0x17, "If-Modified-Since"),
    (0x18, "If-Match"),
    (0x19, "If-None-Match"),
    (0x1A, "If-Range"),
    (0x1B, "If-Unmodified-Since"),
    (0x1C, "Location"),
    (0x1D, "Last-Modified"),
    (0x1E, "Max-Forwards"),
    (0x1F, "Pragma"),
    (0x20, "Proxy-Authenticate"),
    (0x21, "Proxy-Authorization"),
    (0x22, "Public"),
    (0x23, "Range"),
    (0x24, "Referer"),
    (0x25, "Retry-After"),
    (0x26, "Server"),
    (0x27, "Transfer-Encoding"),
    (0x28, "Upgrade"),
    (0x29, "User-Agent"),
    (0x2A, "Vary"),
    (0x2B, "Via"),
    (0x2C, "Warning"),
    (0x2D, "WWW-Authenticate"),
    (0x2E, "Content-Disposition"),
    (0x40, "Content-ID"),
];

const PARAMETER_WELLKNOWN: Entries = &[
    (0x00, "Q"),
    (0x01, "Charset"),
    (0x02, "Level"),
    (0x03, "Type,1.1"),
    (0x05, "Name,1.1"),
    (0x06, "Filename,1.1"),
    (0x07, "Differences"),
    (0x08, "Padding"),
    (0x09, "Type,1.2"),
    (0x0A, "Start,1.2"),
    (0x0B, "Start-Info,1.2"),
    (0x0C, "Comment,1.3"),
    (0x0D, "Domain,1.3"),
    (0x0E, "Max-Age"),
    (0x0F, "Path,1.3"),
    (0x10, "Secure"),
    (0x11, "SEC"),
    (0x12, "MAC"),
    (0x13, "Creation-Date"),
    (0x14, "Modification-Date"),
    (0x15, "Read-Date"),
    (0x16, "Size"),
    (0x17, "Name,1.4"),
    (0x18, "Filename,1.4"),
    (0x19, "Start,1.4"),
    (0x1A, "Start-Info,1.4"),
    (0x1B, "Comment,1.4"),
    (0x1C, "Domain,1.4"),
    (0x1D, "Path,1.4"),
];
