// @generated by maketables from data/jisx0213-2004-std.txt; DO NOT EDIT.
//
// Source: http://x0213.org/codetable/jisx0213-2004-std.txt

use super::encode::EncodeTable;

/// Decoding table from JIS X 0213 coordinates to Unicode, indexed by
/// `[plane - 1][row - 1][cell - 1]`.
pub(crate) static JIS0213_DECODE: [[[Option<&str>; 94]; 94]; 2] = [
    [
        // 1-1
        [
            Some("\u{3000}"), Some("\u{3001}"), Some("\u{3002}"), Some("\u{FF0C}"), Some("\u{FF0E}"), Some("\u{30FB}"), Some("\u{FF1A}"), Some("\u{FF1B}"),
            Some("\u{FF1F}"), Some("\u{FF01}"), Some("\u{309B}"), Some("\u{309C}"), Some("\u{00B4}"), Some("\u{FF40}"), Some("\u{00A8}"), Some("\u{FF3E}"),
            Some("\u{203E}"), Some("\u{FF3F}"), Some("\u{30FD}"), Some("\u{30FE}"), Some("\u{309D}"), Some("\u{309E}"), Some("\u{3003}"), Some("\u{4EDD}"),
            Some("\u{3005}"), Some("\u{3006}"), Some("\u{3007}"), Some("\u{30FC}"), Some("\u{2014}"), Some("\u{2010}"), Some("\u{FF0F}"), Some("\u{FF3C}"),
            Some("\u{301C}"), Some("\u{2016}"), Some("\u{FF5C}"), Some("\u{2026}"), Some("\u{2025}"), Some("\u{2018}"), Some("\u{2019}"), Some("\u{201C}"),
            Some("\u{201D}"), Some("\u{FF08}"), Some("\u{FF09}"), Some("\u{3014}"), Some("\u{3015}"), Some("\u{FF3B}"), Some("\u{FF3D}"), Some("\u{FF5B}"),
            Some("\u{FF5D}"), Some("\u{3008}"), Some("\u{3009}"), Some("\u{300A}"), Some("\u{300B}"), Some("\u{300C}"), Some("\u{300D}"), Some("\u{300E}"),
            Some("\u{300F}"), Some("\u{3010}"), Some("\u{3011}"), Some("\u{FF0B}"), Some("\u{2212}"), Some("\u{00B1}"), Some("\u{00D7}"), Some("\u{00F7}"),
            Some("\u{FF1D}"), Some("\u{2260}"), Some("\u{FF1C}"), Some("\u{FF1E}"), Some("\u{2266}"), Some("\u{2267}"), Some("\u{221E}"), Some("\u{2234}"),
            Some("\u{2642}"), Some("\u{2640}"), Some("\u{00B0}"), Some("\u{2032}"), Some("\u{2033}"), Some("\u{2103}"), Some("\u{00A5}"), Some("\u{FF04}"),
            Some("\u{00A2}"), Some("\u{00A3}"), Some("\u{FF05}"), Some("\u{FF03}"), Some("\u{FF06}"), Some("\u{FF0A}"), Some("\u{FF20}"), Some("\u{00A7}"),
            Some("\u{2606}"), Some("\u{2605}"), Some("\u{25CB}"), Some("\u{25CF}"), Some("\u{25CE}"), Some("\u{25C7}"),
        ],
        // 1-2
        [
            Some("\u{25C6}"), Some("\u{25A1}"), Some("\u{25A0}"), Some("\u{25B3}"), Some("\u{25B2}"), Some("\u{25BD}"), Some("\u{25BC}"), Some("\u{203B}"),
            Some("\u{3012}"), Some("\u{2192}"), Some("\u{2190}"), Some("\u{2191}"), Some("\u{2193}"), Some("\u{3013}"), Some("\u{FF07}"), Some("\u{FF02}"),
            Some("\u{FF0D}"), Some("\u{FF5E}"), Some("\u{3033}"), Some("\u{3034}"), Some("\u{3035}"), Some("\u{303B}"), Some("\u{303C}"), Some("\u{30FF}"),
            Some("\u{309F}"), Some("\u{2208}"), Some("\u{220B}"), Some("\u{2286}"), Some("\u{2287}"), Some("\u{2282}"), Some("\u{2283}"), Some("\u{222A}"),
            Some("\u{2229}"), Some("\u{2284}"), Some("\u{2285}"), Some("\u{228A}"), Some("\u{228B}"), Some("\u{2209}"), Some("\u{2205}"), Some("\u{2305}"),
            Some("\u{2306}"), Some("\u{2227}"), Some("\u{2228}"), Some("\u{00AC}"), Some("\u{21D2}"), Some("\u{21D4}"), Some("\u{2200}"), Some("\u{2203}"),
            Some("\u{2295}"), Some("\u{2296}"), Some("\u{2297}"), Some("\u{2225}"), Some("\u{2226}"), Some("\u{2985}"), Some("\u{2986}"), Some("\u{3018}"),
            Some("\u{3019}"), Some("\u{3016}"), Some("\u{3017}"), Some("\u{2220}"), Some("\u{22A5}"), Some("\u{2312}"), Some("\u{2202}"), Some("\u{2207}"),
            Some("\u{2261}"), Some("\u{2252}"), Some("\u{226A}"), Some("\u{226B}"), Some("\u{221A}"), Some("\u{223D}"), Some("\u{221D}"), Some("\u{2235}"),
            Some("\u{222B}"), Some("\u{222C}"), Some("\u{2262}"), Some("\u{2243}"), Some("\u{2245}"), Some("\u{2248}"), Some("\u{2276}"), Some("\u{2277}"),
            Some("\u{2194}"), Some("\u{212B}"), Some("\u{2030}"), Some("\u{266F}"), Some("\u{266D}"), Some("\u{266A}"), Some("\u{2020}"), Some("\u{2021}"),
            Some("\u{00B6}"), Some("\u{266E}"), Some("\u{266B}"), Some("\u{266C}"), Some("\u{2669}"), Some("\u{25EF}"),
        ],
        // 1-3
        [
            Some("\u{25B7}"), Some("\u{25B6}"), Some("\u{25C1}"), Some("\u{25C0}"), Some("\u{2197}"), Some("\u{2198}"), Some("\u{2196}"), Some("\u{2199}"),
            Some("\u{21C4}"), Some("\u{21E8}"), Some("\u{21E6}"), Some("\u{21E7}"), Some("\u{21E9}"), Some("\u{2934}"), Some("\u{2935}"), Some("\u{FF10}"),
            Some("\u{FF11}"), Some("\u{FF12}"), Some("\u{FF13}"), Some("\u{FF14}"), Some("\u{FF15}"), Some("\u{FF16}"), Some("\u{FF17}"), Some("\u{FF18}"),
            Some("\u{FF19}"), Some("\u{29BF}"), Some("\u{25C9}"), Some("\u{303D}"), Some("\u{FE46}"), Some("\u{FE45}"), Some("\u{25E6}"), Some("\u{2022}"),
            Some("\u{FF21}"), Some("\u{FF22}"), Some("\u{FF23}"), Some("\u{FF24}"), Some("\u{FF25}"), Some("\u{FF26}"), Some("\u{FF27}"), Some("\u{FF28}"),
            Some("\u{FF29}"), Some("\u{FF2A}"), Some("\u{FF2B}"), Some("\u{FF2C}"), Some("\u{FF2D}"), Some("\u{FF2E}"), Some("\u{FF2F}"), Some("\u{FF30}"),
            Some("\u{FF31}"), Some("\u{FF32}"), Some("\u{FF33}"), Some("\u{FF34}"), Some("\u{FF35}"), Some("\u{FF36}"), Some("\u{FF37}"), Some("\u{FF38}"),
            Some("\u{FF39}"), Some("\u{FF3A}"), Some("\u{2213}"), Some("\u{2135}"), Some("\u{210F}"), Some("\u{33CB}"), Some("\u{2113}"), Some("\u{2127}"),
            Some("\u{FF41}"), Some("\u{FF42}"), Some("\u{FF43}"), Some("\u{FF44}"), Some("\u{FF45}"), Some("\u{FF46}"), Some("\u{FF47}"), Some("\u{FF48}"),
            Some("\u{FF49}"), Some("\u{FF4A}"), Some("\u{FF4B}"), Some("\u{FF4C}"), Some("\u{FF4D}"), Some("\u{FF4E}"), Some("\u{FF4F}"), Some("\u{FF50}"),
            Some("\u{FF51}"), Some("\u{FF52}"), Some("\u{FF53}"), Some("\u{FF54}"), Some("\u{FF55}"), Some("\u{FF56}"), Some("\u{FF57}"), Some("\u{FF58}"),
            Some("\u{FF59}"), Some("\u{FF5A}"), Some("\u{30A0}"), Some("\u{2013}"), Some("\u{29FA}"), Some("\u{29FB}"),
        ],
        // 1-4
        [
            Some("\u{3041}"), Some("\u{3042}"), Some("\u{3043}"), Some("\u{3044}"), Some("\u{3045}"), Some("\u{3046}"), Some("\u{3047}"), Some("\u{3048}"),
            Some("\u{3049}"), Some("\u{304A}"), Some("\u{304B}"), Some("\u{304C}"), Some("\u{304D}"), Some("\u{304E}"), Some("\u{304F}"), Some("\u{3050}"),
            Some("\u{3051}"), Some("\u{3052}"), Some("\u{3053}"), Some("\u{3054}"), Some("\u{3055}"), Some("\u{3056}"), Some("\u{3057}"), Some("\u{3058}"),
            Some("\u{3059}"), Some("\u{305A}"), Some("\u{305B}"), Some("\u{305C}"), Some("\u{305D}"), Some("\u{305E}"), Some("\u{305F}"), Some("\u{3060}"),
            Some("\u{3061}"), Some("\u{3062}"), Some("\u{3063}"), Some("\u{3064}"), Some("\u{3065}"), Some("\u{3066}"), Some("\u{3067}"), Some("\u{3068}"),
            Some("\u{3069}"), Some("\u{306A}"), Some("\u{306B}"), Some("\u{306C}"), Some("\u{306D}"), Some("\u{306E}"), Some("\u{306F}"), Some("\u{3070}"),
            Some("\u{3071}"), Some("\u{3072}"), Some("\u{3073}"), Some("\u{3074}"), Some("\u{3075}"), Some("\u{3076}"), Some("\u{3077}"), Some("\u{3078}"),
            Some("\u{3079}"), Some("\u{307A}"), Some("\u{307B}"), Some("\u{307C}"), Some("\u{307D}"), Some("\u{307E}"), Some("\u{307F}"), Some("\u{3080}"),
            Some("\u{3081}"), Some("\u{3082}"), Some("\u{3083}"), Some("\u{3084}"), Some("\u{3085}"), Some("\u{3086}"), Some("\u{3087}"), Some("\u{3088}"),
            Some("\u{3089}"), Some("\u{308A}"), Some("\u{308B}"), Some("\u{308C}"), Some("\u{308D}"), Some("\u{308E}"), Some("\u{308F}"), Some("\u{3090}"),
            Some("\u{3091}"), Some("\u{3092}"), Some("\u{3093}"), Some("\u{3094}"), Some("\u{3095}"), Some("\u{3096}"), Some("\u{304B}\u{309A}"), Some("\u{304D}\u{309A}"),
            Some("\u{304F}\u{309A}"), Some("\u{3051}\u{309A}"), Some("\u{3053}\u{309A}"), None, None, None,
        ],
        // 1-5
        [
            Some("\u{30A1}"), Some("\u{30A2}"), Some("\u{30A3}"), Some("\u{30A4}"), Some("\u{30A5}"), Some("\u{30A6}"), Some("\u{30A7}"), Some("\u{30A8}"),
            Some("\u{30A9}"), Some("\u{30AA}"), Some("\u{30AB}"), Some("\u{30AC}"), Some("\u{30AD}"), Some("\u{30AE}"), Some("\u{30AF}"), Some("\u{30B0}"),
            Some("\u{30B1}"), Some("\u{30B2}"), Some("\u{30B3}"), Some("\u{30B4}"), Some("\u{30B5}"), Some("\u{30B6}"), Some("\u{30B7}"), Some("\u{30B8}"),
            Some("\u{30B9}"), Some("\u{30BA}"), Some("\u{30BB}"), Some("\u{30BC}"), Some("\u{30BD}"), Some("\u{30BE}"), Some("\u{30BF}"), Some("\u{30C0}"),
            Some("\u{30C1}"), Some("\u{30C2}"), Some("\u{30C3}"), Some("\u{30C4}"), Some("\u{30C5}"), Some("\u{30C6}"), Some("\u{30C7}"), Some("\u{30C8}"),
            Some("\u{30C9}"), Some("\u{30CA}"), Some("\u{30CB}"), Some("\u{30CC}"), Some("\u{30CD}"), Some("\u{30CE}"), Some("\u{30CF}"), Some("\u{30D0}"),
            Some("\u{30D1}"), Some("\u{30D2}"), Some("\u{30D3}"), Some("\u{30D4}"), Some("\u{30D5}"), Some("\u{30D6}"), Some("\u{30D7}"), Some("\u{30D8}"),
            Some("\u{30D9}"), Some("\u{30DA}"), Some("\u{30DB}"), Some("\u{30DC}"), Some("\u{30DD}"), Some("\u{30DE}"), Some("\u{30DF}"), Some("\u{30E0}"),
            Some("\u{30E1}"), Some("\u{30E2}"), Some("\u{30E3}"), Some("\u{30E4}"), Some("\u{30E5}"), Some("\u{30E6}"), Some("\u{30E7}"), Some("\u{30E8}"),
            Some("\u{30E9}"), Some("\u{30EA}"), Some("\u{30EB}"), Some("\u{30EC}"), Some("\u{30ED}"), Some("\u{30EE}"), Some("\u{30EF}"), Some("\u{30F0}"),
            Some("\u{30F1}"), Some("\u{30F2}"), Some("\u{30F3}"), Some("\u{30F4}"), Some("\u{30F5}"), Some("\u{30F6}"), Some("\u{30AB}\u{309A}"), Some("\u{30AD}\u{309A}"),
            Some("\u{30AF}\u{309A}"), Some("\u{30B1}\u{309A}"), Some("\u{30B3}\u{309A}"), Some("\u{30BB}\u{309A}"), Some("\u{30C4}\u{309A}"), Some("\u{30C8}\u{309A}"),
        ],
        // 1-6
        [
            Some("\u{0391}"), Some("\u{0392}"), Some("\u{0393}"), Some("\u{0394}"), Some("\u{0395}"), Some("\u{0396}"), Some("\u{0397}"), Some("\u{0398}"),
            Some("\u{0399}"), Some("\u{039A}"), Some("\u{039B}"), Some("\u{039C}"), Some("\u{039D}"), Some("\u{039E}"), Some("\u{039F}"), Some("\u{03A0}"),
            Some("\u{03A1}"), Some("\u{03A3}"), Some("\u{03A4}"), Some("\u{03A5}"), Some("\u{03A6}"), Some("\u{03A7}"), Some("\u{03A8}"), Some("\u{03A9}"),
            Some("\u{2664}"), Some("\u{2660}"), Some("\u{2662}"), Some("\u{2666}"), Some("\u{2661}"), Some("\u{2665}"), Some("\u{2667}"), Some("\u{2663}"),
            Some("\u{03B1}"), Some("\u{03B2}"), Some("\u{03B3}"), Some("\u{03B4}"), Some("\u{03B5}"), Some("\u{03B6}"), Some("\u{03B7}"), Some("\u{03B8}"),
            Some("\u{03B9}"), Some("\u{03BA}"), Some("\u{03BB}"), Some("\u{03BC}"), Some("\u{03BD}"), Some("\u{03BE}"), Some("\u{03BF}"), Some("\u{03C0}"),
            Some("\u{03C1}"), Some("\u{03C3}"), Some("\u{03C4}"), Some("\u{03C5}"), Some("\u{03C6}"), Some("\u{03C7}"), Some("\u{03C8}"), Some("\u{03C9}"),
            Some("\u{03C2}"), Some("\u{24F5}"), Some("\u{24F6}"), Some("\u{24F7}"), Some("\u{24F8}"), Some("\u{24F9}"), Some("\u{24FA}"), Some("\u{24FB}"),
            Some("\u{24FC}"), Some("\u{24FD}"), Some("\u{24FE}"), Some("\u{2616}"), Some("\u{2617}"), Some("\u{3020}"), Some("\u{260E}"), Some("\u{2600}"),
            Some("\u{2601}"), Some("\u{2602}"), Some("\u{2603}"), Some("\u{2668}"), Some("\u{25B1}"), Some("\u{31F0}"), Some("\u{31F1}"), Some("\u{31F2}"),
            Some("\u{31F3}"), Some("\u{31F4}"), Some("\u{31F5}"), Some("\u{31F6}"), Some("\u{31F7}"), Some("\u{31F8}"), Some("\u{31F9}"), Some("\u{31F7}\u{309A}"),
            Some("\u{31FA}"), Some("\u{31FB}"), Some("\u{31FC}"), Some("\u{31FD}"), Some("\u{31FE}"), Some("\u{31FF}"),
        ],
        // 1-7
        [
            Some("\u{0410}"), Some("\u{0411}"), Some("\u{0412}"), Some("\u{0413}"), Some("\u{0414}"), Some("\u{0415}"), Some("\u{0401}"), Some("\u{0416}"),
            Some("\u{0417}"), Some("\u{0418}"), Some("\u{0419}"), Some("\u{041A}"), Some("\u{041B}"), Some("\u{041C}"), Some("\u{041D}"), Some("\u{041E}"),
            Some("\u{041F}"), Some("\u{0420}"), Some("\u{0421}"), Some("\u{0422}"), Some("\u{0423}"), Some("\u{0424}"), Some("\u{0425}"), Some("\u{0426}"),
            Some("\u{0427}"), Some("\u{0428}"), Some("\u{0429}"), Some("\u{042A}"), Some("\u{042B}"), Some("\u{042C}"), Some("\u{042D}"), Some("\u{042E}"),
            Some("\u{042F}"), Some("\u{23BE}"), Some("\u{23BF}"), Some("\u{23C0}"), Some("\u{23C1}"), Some("\u{23C2}"), Some("\u{23C3}"), Some("\u{23C4}"),
            Some("\u{23C5}"), Some("\u{23C6}"), Some("\u{23C7}"), Some("\u{23C8}"), Some("\u{23C9}"), Some("\u{23CA}"), Some("\u{23CB}"), Some("\u{23CC}"),
            Some("\u{0430}"), Some("\u{0431}"), Some("\u{0432}"), Some("\u{0433}"), Some("\u{0434}"), Some("\u{0435}"), Some("\u{0451}"), Some("\u{0436}"),
            Some("\u{0437}"), Some("\u{0438}"), Some("\u{0439}"), Some("\u{043A}"), Some("\u{043B}"), Some("\u{043C}"), Some("\u{043D}"), Some("\u{043E}"),
            Some("\u{043F}"), Some("\u{0440}"), Some("\u{0441}"), Some("\u{0442}"), Some("\u{0443}"), Some("\u{0444}"), Some("\u{0445}"), Some("\u{0446}"),
            Some("\u{0447}"), Some("\u{0448}"), Some("\u{0449}"), Some("\u{044A}"), Some("\u{044B}"), Some("\u{044C}"), Some("\u{044D}"), Some("\u{044E}"),
            Some("\u{044F}"), Some("\u{30F7}"), Some("\u{30F8}"), Some("\u{30F9}"), Some("\u{30FA}"), Some("\u{22DA}"), Some("\u{22DB}"), Some("\u{2153}"),
            Some("\u{2154}"), Some("\u{2155}"), Some("\u{2713}"), Some("\u{2318}"), Some("\u{2423}"), Some("\u{23CE}"),
        ],
        // 1-8
        [
            Some("\u{2500}"), Some("\u{2502}"), Some("\u{250C}"), Some("\u{2510}"), Some("\u{2518}"), Some("\u{2514}"), Some("\u{251C}"), Some("\u{252C}"),
            Some("\u{2524}"), Some("\u{2534}"), Some("\u{253C}"), Some("\u{2501}"), Some("\u{2503}"), Some("\u{250F}"), Some("\u{2513}"), Some("\u{251B}"),
            Some("\u{2517}"), Some("\u{2523}"), Some("\u{2533}"), Some("\u{252B}"), Some("\u{253B}"), Some("\u{254B}"), Some("\u{2520}"), Some("\u{252F}"),
            Some("\u{2528}"), Some("\u{2537}"), Some("\u{253F}"), Some("\u{251D}"), Some("\u{2530}"), Some("\u{2525}"), Some("\u{2538}"), Some("\u{2542}"),
            Some("\u{3251}"), Some("\u{3252}"), Some("\u{3253}"), Some("\u{3254}"), Some("\u{3255}"), Some("\u{3256}"), Some("\u{3257}"), Some("\u{3258}"),
            Some("\u{3259}"), Some("\u{325A}"), Some("\u{325B}"), Some("\u{325C}"), Some("\u{325D}"), Some("\u{325E}"), Some("\u{325F}"), Some("\u{32B1}"),
            Some("\u{32B2}"), Some("\u{32B3}"), Some("\u{32B4}"), Some("\u{32B5}"), Some("\u{32B6}"), Some("\u{32B7}"), Some("\u{32B8}"), Some("\u{32B9}"),
            Some("\u{32BA}"), Some("\u{32BB}"), Some("\u{32BC}"), Some("\u{32BD}"), Some("\u{32BE}"), Some("\u{32BF}"), None, None,
            None, None, None, None, None, None, Some("\u{25D0}"), Some("\u{25D1}"),
            Some("\u{25D2}"), Some("\u{25D3}"), Some("\u{203C}"), Some("\u{2047}"), Some("\u{2048}"), Some("\u{2049}"), Some("\u{01CD}"), Some("\u{01CE}"),
            Some("\u{01D0}"), Some("\u{1E3E}"), Some("\u{1E3F}"), Some("\u{01F8}"), Some("\u{01F9}"), Some("\u{01D1}"), Some("\u{01D2}"), Some("\u{01D4}"),
            Some("\u{01D6}"), Some("\u{01D8}"), Some("\u{01DA}"), Some("\u{01DC}"), None, None,
        ],
        // 1-9
        [
            Some("\u{20AC}"), Some("\u{00A0}"), Some("\u{00A1}"), Some("\u{00A4}"), Some("\u{00A6}"), Some("\u{00A9}"), Some("\u{00AA}"), Some("\u{00AB}"),
            Some("\u{00AD}"), Some("\u{00AE}"), Some("\u{00AF}"), Some("\u{00B2}"), Some("\u{00B3}"), Some("\u{00B7}"), Some("\u{00B8}"), Some("\u{00B9}"),
            Some("\u{00BA}"), Some("\u{00BB}"), Some("\u{00BC}"), Some("\u{00BD}"), Some("\u{00BE}"), Some("\u{00BF}"), Some("\u{00C0}"), Some("\u{00C1}"),
            Some("\u{00C2}"), Some("\u{00C3}"), Some("\u{00C4}"), Some("\u{00C5}"), Some("\u{00C6}"), Some("\u{00C7}"), Some("\u{00C8}"), Some("\u{00C9}"),
            Some("\u{00CA}"), Some("\u{00CB}"), Some("\u{00CC}"), Some("\u{00CD}"), Some("\u{00CE}"), Some("\u{00CF}"), Some("\u{00D0}"), Some("\u{00D1}"),
            Some("\u{00D2}"), Some("\u{00D3}"), Some("\u{00D4}"), Some("\u{00D5}"), Some("\u{00D6}"), Some("\u{00D8}"), Some("\u{00D9}"), Some("\u{00DA}"),
            Some("\u{00DB}"), Some("\u{00DC}"), Some("\u{00DD}"), Some("\u{00DE}"), Some("\u{00DF}"), Some("\u{00E0}"), Some("\u{00E1}"), Some("\u{00E2}"),
            Some("\u{00E3}"), Some("\u{00E4}"), Some("\u{00E5}"), Some("\u{00E6}"), Some("\u{00E7}"), Some("\u{00E8}"), Some("\u{00E9}"), Some("\u{00EA}"),
            Some("\u{00EB}"), Some("\u{00EC}"), Some("\u{00ED}"), Some("\u{00EE}"), Some("\u{00EF}"), Some("\u{00F0}"), Some("\u{00F1}"), Some("\u{00F2}"),
            Some("\u{00F3}"), Some("\u{00F4}"), Some("\u{00F5}"), Some("\u{00F6}"), Some("\u{00F8}"), Some("\u{00F9}"), Some("\u{00FA}"), Some("\u{00FB}"),
            Some("\u{00FC}"), Some("\u{00FD}"), Some("\u{00FE}"), Some("\u{00FF}"), Some("\u{0100}"), Some("\u{012A}"), Some("\u{016A}"), Some("\u{0112}"),
            Some("\u{014C}"), Some("\u{0101}"), Some("\u{012B}"), Some("\u{016B}"), Some("\u{0113}"), Some("\u{014D}"),
        ],
        // 1-10
        [
            Some("\u{0104}"), Some("\u{02D8}"), Some("\u{0141}"), Some("\u{013D}"), Some("\u{015A}"), Some("\u{0160}"), Some("\u{015E}"), Some("\u{0164}"),
            Some("\u{0179}"), Some("\u{017D}"), Some("\u{017B}"), Some("\u{0105}"), Some("\u{02DB}"), Some("\u{0142}"), Some("\u{013E}"), Some("\u{015B}"),
            Some("\u{02C7}"), Some("\u{0161}"), Some("\u{015F}"), Some("\u{0165}"), Some("\u{017A}"), Some("\u{02DD}"), Some("\u{017E}"), Some("\u{017C}"),
            Some("\u{0154}"), Some("\u{0102}"), Some("\u{0139}"), Some("\u{0106}"), Some("\u{010C}"), Some("\u{0118}"), Some("\u{011A}"), Some("\u{010E}"),
            Some("\u{0143}"), Some("\u{0147}"), Some("\u{0150}"), Some("\u{0158}"), Some("\u{016E}"), Some("\u{0170}"), Some("\u{0162}"), Some("\u{0155}"),
            Some("\u{0103}"), Some("\u{013A}"), Some("\u{0107}"), Some("\u{010D}"), Some("\u{0119}"), Some("\u{011B}"), Some("\u{010F}"), Some("\u{0111}"),
            Some("\u{0144}"), Some("\u{0148}"), Some("\u{0151}"), Some("\u{0159}"), Some("\u{016F}"), Some("\u{0171}"), Some("\u{0163}"), Some("\u{02D9}"),
            Some("\u{0108}"), Some("\u{011C}"), Some("\u{0124}"), Some("\u{0134}"), Some("\u{015C}"), Some("\u{016C}"), Some("\u{0109}"), Some("\u{011D}"),
            Some("\u{0125}"), Some("\u{0135}"), Some("\u{015D}"), Some("\u{016D}"), Some("\u{0271}"), Some("\u{028B}"), Some("\u{027E}"), Some("\u{0283}"),
            Some("\u{0292}"), Some("\u{026C}"), Some("\u{026E}"), Some("\u{0279}"), Some("\u{0288}"), Some("\u{0256}"), Some("\u{0273}"), Some("\u{027D}"),
            Some("\u{0282}"), Some("\u{0290}"), Some("\u{027B}"), Some("\u{026D}"), Some("\u{025F}"), Some("\u{0272}"), Some("\u{029D}"), Some("\u{028E}"),
            Some("\u{0261}"), Some("\u{014B}"), Some("\u{0270}"), Some("\u{0281}"), Some("\u{0127}"), Some("\u{0295}"),
        ],
        // 1-11
        [
            Some("\u{0294}"), Some("\u{0266}"), Some("\u{0298}"), Some("\u{01C2}"), Some("\u{0253}"), Some("\u{0257}"), Some("\u{0284}"), Some("\u{0260}"),
            Some("\u{0193}"), Some("\u{0153}"), Some("\u{0152}"), Some("\u{0268}"), Some("\u{0289}"), Some("\u{0258}"), Some("\u{0275}"), Some("\u{0259}"),
            Some("\u{025C}"), Some("\u{025E}"), Some("\u{0250}"), Some("\u{026F}"), Some("\u{028A}"), Some("\u{0264}"), Some("\u{028C}"), Some("\u{0254}"),
            Some("\u{0251}"), Some("\u{0252}"), Some("\u{028D}"), Some("\u{0265}"), Some("\u{02A2}"), Some("\u{02A1}"), Some("\u{0255}"), Some("\u{0291}"),
            Some("\u{027A}"), Some("\u{0267}"), Some("\u{025A}"), Some("\u{00E6}\u{0300}"), Some("\u{01FD}"), Some("\u{1F70}"), Some("\u{1F71}"), Some("\u{0254}\u{0300}"),
            Some("\u{0254}\u{0301}"), Some("\u{028C}\u{0300}"), Some("\u{028C}\u{0301}"), Some("\u{0259}\u{0300}"), Some("\u{0259}\u{0301}"), Some("\u{025A}\u{0300}"), Some("\u{025A}\u{0301}"), Some("\u{1F72}"),
            Some("\u{1F73}"), Some("\u{0361}"), Some("\u{02C8}"), Some("\u{02CC}"), Some("\u{02D0}"), Some("\u{02D1}"), Some("\u{0306}"), Some("\u{203F}"),
            Some("\u{030B}"), Some("\u{0301}"), Some("\u{0304}"), Some("\u{0300}"), Some("\u{030F}"), Some("\u{030C}"), Some("\u{0302}"), Some("\u{02E5}"),
            Some("\u{02E6}"), Some("\u{02E7}"), Some("\u{02E8}"), Some("\u{02E9}"), Some("\u{02E9}\u{02E5}"), Some("\u{02E5}\u{02E9}"), Some("\u{0325}"), Some("\u{032C}"),
            Some("\u{0339}"), Some("\u{031C}"), Some("\u{031F}"), Some("\u{0320}"), Some("\u{0308}"), Some("\u{033D}"), Some("\u{0329}"), Some("\u{032F}"),
            Some("\u{02DE}"), Some("\u{0324}"), Some("\u{0330}"), Some("\u{033C}"), Some("\u{0334}"), Some("\u{031D}"), Some("\u{031E}"), Some("\u{0318}"),
            Some("\u{0319}"), Some("\u{032A}"), Some("\u{033A}"), Some("\u{033B}"), Some("\u{0303}"), Some("\u{031A}"),
        ],
        // 1-12
        [
            Some("\u{2776}"), Some("\u{2777}"), Some("\u{2778}"), Some("\u{2779}"), Some("\u{277A}"), Some("\u{277B}"), Some("\u{277C}"), Some("\u{277D}"),
            Some("\u{277E}"), Some("\u{277F}"), Some("\u{24EB}"), Some("\u{24EC}"), Some("\u{24ED}"), Some("\u{24EE}"), Some("\u{24EF}"), Some("\u{24F0}"),
            Some("\u{24F1}"), Some("\u{24F2}"), Some("\u{24F3}"), Some("\u{24F4}"), Some("\u{2170}"), Some("\u{2171}"), Some("\u{2172}"), Some("\u{2173}"),
            Some("\u{2174}"), Some("\u{2175}"), Some("\u{2176}"), Some("\u{2177}"), Some("\u{2178}"), Some("\u{2179}"), Some("\u{217A}"), Some("\u{217B}"),
            Some("\u{24D0}"), Some("\u{24D1}"), Some("\u{24D2}"), Some("\u{24D3}"), Some("\u{24D4}"), Some("\u{24D5}"), Some("\u{24D6}"), Some("\u{24D7}"),
            Some("\u{24D8}"), Some("\u{24D9}"), Some("\u{24DA}"), Some("\u{24DB}"), Some("\u{24DC}"), Some("\u{24DD}"), Some("\u{24DE}"), Some("\u{24DF}"),
            Some("\u{24E0}"), Some("\u{24E1}"), Some("\u{24E2}"), Some("\u{24E3}"), Some("\u{24E4}"), Some("\u{24E5}"), Some("\u{24E6}"), Some("\u{24E7}"),
            Some("\u{24E8}"), Some("\u{24E9}"), Some("\u{32D0}"), Some("\u{32D1}"), Some("\u{32D2}"), Some("\u{32D3}"), Some("\u{32D4}"), Some("\u{32D5}"),
            Some("\u{32D6}"), Some("\u{32D7}"), Some("\u{32D8}"), Some("\u{32D9}"), Some("\u{32DA}"), Some("\u{32DB}"), Some("\u{32DC}"), Some("\u{32DD}"),
            Some("\u{32DE}"), Some("\u{32DF}"), Some("\u{32E0}"), Some("\u{32E1}"), Some("\u{32E2}"), Some("\u{32E3}"), Some("\u{32FA}"), Some("\u{32E9}"),
            Some("\u{32E5}"), Some("\u{32ED}"), Some("\u{32EC}"), None, None, None, None, None,
            None, None, None, None, Some("\u{2051}"), Some("\u{2042}"),
        ],
        // 1-13
        [
            Some("\u{2460}"), Some("\u{2461}"), Some("\u{2462}"), Some("\u{2463}"), Some("\u{2464}"), Some("\u{2465}"), Some("\u{2466}"), Some("\u{2467}"),
            Some("\u{2468}"), Some("\u{2469}"), Some("\u{246A}"), Some("\u{246B}"), Some("\u{246C}"), Some("\u{246D}"), Some("\u{246E}"), Some("\u{246F}"),
            Some("\u{2470}"), Some("\u{2471}"), Some("\u{2472}"), Some("\u{2473}"), Some("\u{2160}"), Some("\u{2161}"), Some("\u{2162}"), Some("\u{2163}"),
            Some("\u{2164}"), Some("\u{2165}"), Some("\u{2166}"), Some("\u{2167}"), Some("\u{2168}"), Some("\u{2169}"), Some("\u{216A}"), Some("\u{3349}"),
            Some("\u{3314}"), Some("\u{3322}"), Some("\u{334D}"), Some("\u{3318}"), Some("\u{3327}"), Some("\u{3303}"), Some("\u{3336}"), Some("\u{3351}"),
            Some("\u{3357}"), Some("\u{330D}"), Some("\u{3326}"), Some("\u{3323}"), Some("\u{332B}"), Some("\u{334A}"), Some("\u{333B}"), Some("\u{339C}"),
            Some("\u{339D}"), Some("\u{339E}"), Some("\u{338E}"), Some("\u{338F}"), Some("\u{33C4}"), Some("\u{33A1}"), Some("\u{216B}"), None,
            None, None, None, None, None, None, Some("\u{337B}"), Some("\u{301D}"),
            Some("\u{301F}"), Some("\u{2116}"), Some("\u{33CD}"), Some("\u{2121}"), Some("\u{32A4}"), Some("\u{32A5}"), Some("\u{32A6}"), Some("\u{32A7}"),
            Some("\u{32A8}"), Some("\u{3231}"), Some("\u{3232}"), Some("\u{3239}"), Some("\u{337E}"), Some("\u{337D}"), Some("\u{337C}"), None,
            None, None, Some("\u{222E}"), None, None, None, None, Some("\u{221F}"),
            Some("\u{22BF}"), None, None, None, Some("\u{2756}"), Some("\u{261E}"),
        ],
        // 1-14
        [
            Some("\u{4FF1}"), Some("\u{2000B}"), Some("\u{3402}"), Some("\u{4E28}"), Some("\u{4E2F}"), Some("\u{4E30}"), Some("\u{4E8D}"), Some("\u{4EE1}"),
            Some("\u{4EFD}"), Some("\u{4EFF}"), Some("\u{4F03}"), Some("\u{4F0B}"), Some("\u{4F60}"), Some("\u{4F48}"), Some("\u{4F49}"), Some("\u{4F56}"),
            Some("\u{4F5F}"), Some("\u{4F6A}"), Some("\u{4F6C}"), Some("\u{4F7E}"), Some("\u{4F8A}"), Some("\u{4F94}"), Some("\u{4F97}"), Some("\u{FA30}"),
            Some("\u{4FC9}"), Some("\u{4FE0}"), Some("\u{5001}"), Some("\u{5002}"), Some("\u{500E}"), Some("\u{5018}"), Some("\u{5027}"), Some("\u{502E}"),
            Some("\u{5040}"), Some("\u{503B}"), Some("\u{5041}"), Some("\u{5094}"), Some("\u{50CC}"), Some("\u{50F2}"), Some("\u{50D0}"), Some("\u{50E6}"),
            Some("\u{FA31}"), Some("\u{5106}"), Some("\u{5103}"), Some("\u{510B}"), Some("\u{511E}"), Some("\u{5135}"), Some("\u{514A}"), Some("\u{FA32}"),
            Some("\u{5155}"), Some("\u{5157}"), Some("\u{34B5}"), Some("\u{519D}"), Some("\u{51C3}"), Some("\u{51CA}"), Some("\u{51DE}"), Some("\u{51E2}"),
            Some("\u{51EE}"), Some("\u{5201}"), Some("\u{34DB}"), Some("\u{5213}"), Some("\u{5215}"), Some("\u{5249}"), Some("\u{5257}"), Some("\u{5261}"),
            Some("\u{5293}"), Some("\u{52C8}"), Some("\u{FA33}"), Some("\u{52CC}"), Some("\u{52D0}"), Some("\u{52D6}"), Some("\u{52DB}"), Some("\u{FA34}"),
            Some("\u{52F0}"), Some("\u{52FB}"), Some("\u{5300}"), Some("\u{5307}"), Some("\u{531C}"), Some("\u{FA35}"), Some("\u{5361}"), Some("\u{5363}"),
            Some("\u{537D}"), Some("\u{5393}"), Some("\u{539D}"), Some("\u{53B2}"), Some("\u{5412}"), Some("\u{5427}"), Some("\u{544D}"), Some("\u{549C}"),
            Some("\u{546B}"), Some("\u{5474}"), Some("\u{547F}"), Some("\u{5488}"), Some("\u{5496}"), Some("\u{54A1}"),
        ],
        // 1-15
        [
            Some("\u{54A9}"), Some("\u{54C6}"), Some("\u{54FF}"), Some("\u{550E}"), Some("\u{552B}"), Some("\u{5535}"), Some("\u{5550}"), Some("\u{555E}"),
            Some("\u{5581}"), Some("\u{5586}"), Some("\u{558E}"), Some("\u{FA36}"), Some("\u{55AD}"), Some("\u{55CE}"), Some("\u{FA37}"), Some("\u{5608}"),
            Some("\u{560E}"), Some("\u{563B}"), Some("\u{5649}"), Some("\u{5676}"), Some("\u{5666}"), Some("\u{FA38}"), Some("\u{566F}"), Some("\u{5671}"),
            Some("\u{5672}"), Some("\u{5699}"), Some("\u{569E}"), Some("\u{56A9}"), Some("\u{56AC}"), Some("\u{56B3}"), Some("\u{56C9}"), Some("\u{56CA}"),
            Some("\u{570A}"), Some("\u{2123D}"), Some("\u{5721}"), Some("\u{572F}"), Some("\u{5733}"), Some("\u{5734}"), Some("\u{5770}"), Some("\u{5777}"),
            Some("\u{577C}"), Some("\u{579C}"), Some("\u{FA0F}"), Some("\u{2131B}"), Some("\u{57B8}"), Some("\u{57C7}"), Some("\u{57C8}"), Some("\u{57CF}"),
            Some("\u{57E4}"), Some("\u{57ED}"), Some("\u{57F5}"), Some("\u{57F6}"), Some("\u{57FF}"), Some("\u{5809}"), Some("\u{FA10}"), Some("\u{5861}"),
            Some("\u{5864}"), Some("\u{FA39}"), Some("\u{587C}"), Some("\u{5889}"), Some("\u{589E}"), Some("\u{FA3A}"), Some("\u{58A9}"), Some("\u{2146E}"),
            Some("\u{58D2}"), Some("\u{58CE}"), Some("\u{58D4}"), Some("\u{58DA}"), Some("\u{58E0}"), Some("\u{58E9}"), Some("\u{590C}"), Some("\u{8641}"),
            Some("\u{595D}"), Some("\u{596D}"), Some("\u{598B}"), Some("\u{5992}"), Some("\u{59A4}"), Some("\u{59C3}"), Some("\u{59D2}"), Some("\u{59DD}"),
            Some("\u{5A13}"), Some("\u{5A23}"), Some("\u{5A67}"), Some("\u{5A6D}"), Some("\u{5A77}"), Some("\u{5A7E}"), Some("\u{5A84}"), Some("\u{5A9E}"),
            Some("\u{5AA7}"), Some("\u{5AC4}"), Some("\u{218BD}"), Some("\u{5B19}"), Some("\u{5B25}"), Some("\u{525D}"),
        ],
        // 1-16
        [
            Some("\u{4E9C}"), Some("\u{5516}"), Some("\u{5A03}"), Some("\u{963F}"), Some("\u{54C0}"), Some("\u{611B}"), Some("\u{6328}"), Some("\u{59F6}"),
            Some("\u{9022}"), Some("\u{8475}"), Some("\u{831C}"), Some("\u{7A50}"), Some("\u{60AA}"), Some("\u{63E1}"), Some("\u{6E25}"), Some("\u{65ED}"),
            Some("\u{8466}"), Some("\u{82A6}"), Some("\u{9BF5}"), Some("\u{6893}"), Some("\u{5727}"), Some("\u{65A1}"), Some("\u{6271}"), Some("\u{5B9B}"),
            Some("\u{59D0}"), Some("\u{867B}"), Some("\u{98F4}"), Some("\u{7D62}"), Some("\u{7DBE}"), Some("\u{9B8E}"), Some("\u{6216}"), Some("\u{7C9F}"),
            Some("\u{88B7}"), Some("\u{5B89}"), Some("\u{5EB5}"), Some("\u{6309}"), Some("\u{6697}"), Some("\u{6848}"), Some("\u{95C7}"), Some("\u{978D}"),
            Some("\u{674F}"), Some("\u{4EE5}"), Some("\u{4F0A}"), Some("\u{4F4D}"), Some("\u{4F9D}"), Some("\u{5049}"), Some("\u{56F2}"), Some("\u{5937}"),
            Some("\u{59D4}"), Some("\u{5A01}"), Some("\u{5C09}"), Some("\u{60DF}"), Some("\u{610F}"), Some("\u{6170}"), Some("\u{6613}"), Some("\u{6905}"),
            Some("\u{70BA}"), Some("\u{754F}"), Some("\u{7570}"), Some("\u{79FB}"), Some("\u{7DAD}"), Some("\u{7DEF}"), Some("\u{80C3}"), Some("\u{840E}"),
            Some("\u{8863}"), Some("\u{8B02}"), Some("\u{9055}"), Some("\u{907A}"), Some("\u{533B}"), Some("\u{4E95}"), Some("\u{4EA5}"), Some("\u{57DF}"),
            Some("\u{80B2}"), Some("\u{90C1}"), Some("\u{78EF}"), Some("\u{4E00}"), Some("\u{58F1}"), Some("\u{6EA2}"), Some("\u{9038}"), Some("\u{7A32}"),
            Some("\u{8328}"), Some("\u{828B}"), Some("\u{9C2F}"), Some("\u{5141}"), Some("\u{5370}"), Some("\u{54BD}"), Some("\u{54E1}"), Some("\u{56E0}"),
            Some("\u{59FB}"), Some("\u{5F15}"), Some("\u{98F2}"), Some("\u{6DEB}"), Some("\u{80E4}"), Some("\u{852D}"),
        ],
        // 1-17
        [
            Some("\u{9662}"), Some("\u{9670}"), Some("\u{96A0}"), Some("\u{97FB}"), Some("\u{540B}"), Some("\u{53F3}"), Some("\u{5B87}"), Some("\u{70CF}"),
            Some("\u{7FBD}"), Some("\u{8FC2}"), Some("\u{96E8}"), Some("\u{536F}"), Some("\u{9D5C}"), Some("\u{7ABA}"), Some("\u{4E11}"), Some("\u{7893}"),
            Some("\u{81FC}"), Some("\u{6E26}"), Some("\u{5618}"), Some("\u{5504}"), Some("\u{6B1D}"), Some("\u{851A}"), Some("\u{9C3B}"), Some("\u{59E5}"),
            Some("\u{53A9}"), Some("\u{6D66}"), Some("\u{74DC}"), Some("\u{958F}"), Some("\u{5642}"), Some("\u{4E91}"), Some("\u{904B}"), Some("\u{96F2}"),
            Some("\u{834F}"), Some("\u{990C}"), Some("\u{53E1}"), Some("\u{55B6}"), Some("\u{5B30}"), Some("\u{5F71}"), Some("\u{6620}"), Some("\u{66F3}"),
            Some("\u{6804}"), Some("\u{6C38}"), Some("\u{6CF3}"), Some("\u{6D29}"), Some("\u{745B}"), Some("\u{76C8}"), Some("\u{7A4E}"), Some("\u{9834}"),
            Some("\u{82F1}"), Some("\u{885B}"), Some("\u{8A60}"), Some("\u{92ED}"), Some("\u{6DB2}"), Some("\u{75AB}"), Some("\u{76CA}"), Some("\u{99C5}"),
            Some("\u{60A6}"), Some("\u{8B01}"), Some("\u{8D8A}"), Some("\u{95B2}"), Some("\u{698E}"), Some("\u{53AD}"), Some("\u{5186}"), Some("\u{5712}"),
            Some("\u{5830}"), Some("\u{5944}"), Some("\u{5BB4}"), Some("\u{5EF6}"), Some("\u{6028}"), Some("\u{63A9}"), Some("\u{63F4}"), Some("\u{6CBF}"),
            Some("\u{6F14}"), Some("\u{708E}"), Some("\u{7114}"), Some("\u{7159}"), Some("\u{71D5}"), Some("\u{733F}"), Some("\u{7E01}"), Some("\u{8276}"),
            Some("\u{82D1}"), Some("\u{8597}"), Some("\u{9060}"), Some("\u{925B}"), Some("\u{9D1B}"), Some("\u{5869}"), Some("\u{65BC}"), Some("\u{6C5A}"),
            Some("\u{7525}"), Some("\u{51F9}"), Some("\u{592E}"), Some("\u{5965}"), Some("\u{5F80}"), Some("\u{5FDC}"),
        ],
        // 1-18
        [
            Some("\u{62BC}"), Some("\u{65FA}"), Some("\u{6A2A}"), Some("\u{6B27}"), Some("\u{6BB4}"), Some("\u{738B}"), Some("\u{7FC1}"), Some("\u{8956}"),
            Some("\u{9D2C}"), Some("\u{9D0E}"), Some("\u{9EC4}"), Some("\u{5CA1}"), Some("\u{6C96}"), Some("\u{837B}"), Some("\u{5104}"), Some("\u{5C4B}"),
            Some("\u{61B6}"), Some("\u{81C6}"), Some("\u{6876}"), Some("\u{7261}"), Some("\u{4E59}"), Some("\u{4FFA}"), Some("\u{5378}"), Some("\u{6069}"),
            Some("\u{6E29}"), Some("\u{7A4F}"), Some("\u{97F3}"), Some("\u{4E0B}"), Some("\u{5316}"), Some("\u{4EEE}"), Some("\u{4F55}"), Some("\u{4F3D}"),
            Some("\u{4FA1}"), Some("\u{4F73}"), Some("\u{52A0}"), Some("\u{53EF}"), Some("\u{5609}"), Some("\u{590F}"), Some("\u{5AC1}"), Some("\u{5BB6}"),
            Some("\u{5BE1}"), Some("\u{79D1}"), Some("\u{6687}"), Some("\u{679C}"), Some("\u{67B6}"), Some("\u{6B4C}"), Some("\u{6CB3}"), Some("\u{706B}"),
            Some("\u{73C2}"), Some("\u{798D}"), Some("\u{79BE}"), Some("\u{7A3C}"), Some("\u{7B87}"), Some("\u{82B1}"), Some("\u{82DB}"), Some("\u{8304}"),
            Some("\u{8377}"), Some("\u{83EF}"), Some("\u{83D3}"), Some("\u{8766}"), Some("\u{8AB2}"), Some("\u{5629}"), Some("\u{8CA8}"), Some("\u{8FE6}"),
            Some("\u{904E}"), Some("\u{971E}"), Some("\u{868A}"), Some("\u{4FC4}"), Some("\u{5CE8}"), Some("\u{6211}"), Some("\u{7259}"), Some("\u{753B}"),
            Some("\u{81E5}"), Some("\u{82BD}"), Some("\u{86FE}"), Some("\u{8CC0}"), Some("\u{96C5}"), Some("\u{9913}"), Some("\u{99D5}"), Some("\u{4ECB}"),
            Some("\u{4F1A}"), Some("\u{89E3}"), Some("\u{56DE}"), Some("\u{584A}"), Some("\u{58CA}"), Some("\u{5EFB}"), Some("\u{5FEB}"), Some("\u{602A}"),
            Some("\u{6094}"), Some("\u{6062}"), Some("\u{61D0}"), Some("\u{6212}"), Some("\u{62D0}"), Some("\u{6539}"),
        ],
        // 1-19
        [
            Some("\u{9B41}"), Some("\u{6666}"), Some("\u{68B0}"), Some("\u{6D77}"), Some("\u{7070}"), Some("\u{754C}"), Some("\u{7686}"), Some("\u{7D75}"),
            Some("\u{82A5}"), Some("\u{87F9}"), Some("\u{958B}"), Some("\u{968E}"), Some("\u{8C9D}"), Some("\u{51F1}"), Some("\u{52BE}"), Some("\u{5916}"),
            Some("\u{54B3}"), Some("\u{5BB3}"), Some("\u{5D16}"), Some("\u{6168}"), Some("\u{6982}"), Some("\u{6DAF}"), Some("\u{788D}"), Some("\u{84CB}"),
            Some("\u{8857}"), Some("\u{8A72}"), Some("\u{93A7}"), Some("\u{9AB8}"), Some("\u{6D6C}"), Some("\u{99A8}"), Some("\u{86D9}"), Some("\u{57A3}"),
            Some("\u{67FF}"), Some("\u{86CE}"), Some("\u{920E}"), Some("\u{5283}"), Some("\u{5687}"), Some("\u{5404}"), Some("\u{5ED3}"), Some("\u{62E1}"),
            Some("\u{64B9}"), Some("\u{683C}"), Some("\u{6838}"), Some("\u{6BBB}"), Some("\u{7372}"), Some("\u{78BA}"), Some("\u{7A6B}"), Some("\u{899A}"),
            Some("\u{89D2}"), Some("\u{8D6B}"), Some("\u{8F03}"), Some("\u{90ED}"), Some("\u{95A3}"), Some("\u{9694}"), Some("\u{9769}"), Some("\u{5B66}"),
            Some("\u{5CB3}"), Some("\u{697D}"), Some("\u{984D}"), Some("\u{984E}"), Some("\u{639B}"), Some("\u{7B20}"), Some("\u{6A2B}"), Some("\u{6A7F}"),
            Some("\u{68B6}"), Some("\u{9C0D}"), Some("\u{6F5F}"), Some("\u{5272}"), Some("\u{559D}"), Some("\u{6070}"), Some("\u{62EC}"), Some("\u{6D3B}"),
            Some("\u{6E07}"), Some("\u{6ED1}"), Some("\u{845B}"), Some("\u{8910}"), Some("\u{8F44}"), Some("\u{4E14}"), Some("\u{9C39}"), Some("\u{53F6}"),
            Some("\u{691B}"), Some("\u{6A3A}"), Some("\u{9784}"), Some("\u{682A}"), Some("\u{515C}"), Some("\u{7AC3}"), Some("\u{84B2}"), Some("\u{91DC}"),
            Some("\u{938C}"), Some("\u{565B}"), Some("\u{9D28}"), Some("\u{6822}"), Some("\u{8305}"), Some("\u{8431}"),
        ],
        // 1-20
        [
            Some("\u{7CA5}"), Some("\u{5208}"), Some("\u{82C5}"), Some("\u{74E6}"), Some("\u{4E7E}"), Some("\u{4F83}"), Some("\u{51A0}"), Some("\u{5BD2}"),
            Some("\u{520A}"), Some("\u{52D8}"), Some("\u{52E7}"), Some("\u{5DFB}"), Some("\u{559A}"), Some("\u{582A}"), Some("\u{59E6}"), Some("\u{5B8C}"),
            Some("\u{5B98}"), Some("\u{5BDB}"), Some("\u{5E72}"), Some("\u{5E79}"), Some("\u{60A3}"), Some("\u{611F}"), Some("\u{6163}"), Some("\u{61BE}"),
            Some("\u{63DB}"), Some("\u{6562}"), Some("\u{67D1}"), Some("\u{6853}"), Some("\u{68FA}"), Some("\u{6B3E}"), Some("\u{6B53}"), Some("\u{6C57}"),
            Some("\u{6F22}"), Some("\u{6F97}"), Some("\u{6F45}"), Some("\u{74B0}"), Some("\u{7518}"), Some("\u{76E3}"), Some("\u{770B}"), Some("\u{7AFF}"),
            Some("\u{7BA1}"), Some("\u{7C21}"), Some("\u{7DE9}"), Some("\u{7F36}"), Some("\u{7FF0}"), Some("\u{809D}"), Some("\u{8266}"), Some("\u{839E}"),
            Some("\u{89B3}"), Some("\u{8ACC}"), Some("\u{8CAB}"), Some("\u{9084}"), Some("\u{9451}"), Some("\u{9593}"), Some("\u{9591}"), Some("\u{95A2}"),
            Some("\u{9665}"), Some("\u{97D3}"), Some("\u{9928}"), Some("\u{8218}"), Some("\u{4E38}"), Some("\u{542B}"), Some("\u{5CB8}"), Some("\u{5DCC}"),
            Some("\u{73A9}"), Some("\u{764C}"), Some("\u{773C}"), Some("\u{5CA9}"), Some("\u{7FEB}"), Some("\u{8D0B}"), Some("\u{96C1}"), Some("\u{9811}"),
            Some("\u{9854}"), Some("\u{9858}"), Some("\u{4F01}"), Some("\u{4F0E}"), Some("\u{5371}"), Some("\u{559C}"), Some("\u{5668}"), Some("\u{57FA}"),
            Some("\u{5947}"), Some("\u{5B09}"), Some("\u{5BC4}"), Some("\u{5C90}"), Some("\u{5E0C}"), Some("\u{5E7E}"), Some("\u{5FCC}"), Some("\u{63EE}"),
            Some("\u{673A}"), Some("\u{65D7}"), Some("\u{65E2}"), Some("\u{671F}"), Some("\u{68CB}"), Some("\u{68C4}"),
        ],
        // 1-21
        [
            Some("\u{6A5F}"), Some("\u{5E30}"), Some("\u{6BC5}"), Some("\u{6C17}"), Some("\u{6C7D}"), Some("\u{757F}"), Some("\u{7948}"), Some("\u{5B63}"),
            Some("\u{7A00}"), Some("\u{7D00}"), Some("\u{5FBD}"), Some("\u{898F}"), Some("\u{8A18}"), Some("\u{8CB4}"), Some("\u{8D77}"), Some("\u{8ECC}"),
            Some("\u{8F1D}"), Some("\u{98E2}"), Some("\u{9A0E}"), Some("\u{9B3C}"), Some("\u{4E80}"), Some("\u{507D}"), Some("\u{5100}"), Some("\u{5993}"),
            Some("\u{5B9C}"), Some("\u{622F}"), Some("\u{6280}"), Some("\u{64EC}"), Some("\u{6B3A}"), Some("\u{72A0}"), Some("\u{7591}"), Some("\u{7947}"),
            Some("\u{7FA9}"), Some("\u{87FB}"), Some("\u{8ABC}"), Some("\u{8B70}"), Some("\u{63AC}"), Some("\u{83CA}"), Some("\u{97A0}"), Some("\u{5409}"),
            Some("\u{5403}"), Some("\u{55AB}"), Some("\u{6854}"), Some("\u{6A58}"), Some("\u{8A70}"), Some("\u{7827}"), Some("\u{6775}"), Some("\u{9ECD}"),
            Some("\u{5374}"), Some("\u{5BA2}"), Some("\u{811A}"), Some("\u{8650}"), Some("\u{9006}"), Some("\u{4E18}"), Some("\u{4E45}"), Some("\u{4EC7}"),
            Some("\u{4F11}"), Some("\u{53CA}"), Some("\u{5438}"), Some("\u{5BAE}"), Some("\u{5F13}"), Some("\u{6025}"), Some("\u{6551}"), Some("\u{673D}"),
            Some("\u{6C42}"), Some("\u{6C72}"), Some("\u{6CE3}"), Some("\u{7078}"), Some("\u{7403}"), Some("\u{7A76}"), Some("\u{7AAE}"), Some("\u{7B08}"),
            Some("\u{7D1A}"), Some("\u{7CFE}"), Some("\u{7D66}"), Some("\u{65E7}"), Some("\u{725B}"), Some("\u{53BB}"), Some("\u{5C45}"), Some("\u{5DE8}"),
            Some("\u{62D2}"), Some("\u{62E0}"), Some("\u{6319}"), Some("\u{6E20}"), Some("\u{865A}"), Some("\u{8A31}"), Some("\u{8DDD}"), Some("\u{92F8}"),
            Some("\u{6F01}"), Some("\u{79A6}"), Some("\u{9B5A}"), Some("\u{4EA8}"), Some("\u{4EAB}"), Some("\u{4EAC}"),
        ],
        // 1-22
        [
            Some("\u{4F9B}"), Some("\u{4FA0}"), Some("\u{50D1}"), Some("\u{5147}"), Some("\u{7AF6}"), Some("\u{5171}"), Some("\u{51F6}"), Some("\u{5354}"),
            Some("\u{5321}"), Some("\u{537F}"), Some("\u{53EB}"), Some("\u{55AC}"), Some("\u{5883}"), Some("\u{5CE1}"), Some("\u{5F37}"), Some("\u{5F4A}"),
            Some("\u{602F}"), Some("\u{6050}"), Some("\u{606D}"), Some("\u{631F}"), Some("\u{6559}"), Some("\u{6A4B}"), Some("\u{6CC1}"), Some("\u{72C2}"),
            Some("\u{72ED}"), Some("\u{77EF}"), Some("\u{80F8}"), Some("\u{8105}"), Some("\u{8208}"), Some("\u{854E}"), Some("\u{90F7}"), Some("\u{93E1}"),
            Some("\u{97FF}"), Some("\u{9957}"), Some("\u{9A5A}"), Some("\u{4EF0}"), Some("\u{51DD}"), Some("\u{5C2D}"), Some("\u{6681}"), Some("\u{696D}"),
            Some("\u{5C40}"), Some("\u{66F2}"), Some("\u{6975}"), Some("\u{7389}"), Some("\u{6850}"), Some("\u{7C81}"), Some("\u{50C5}"), Some("\u{52E4}"),
            Some("\u{5747}"), Some("\u{5DFE}"), Some("\u{9326}"), Some("\u{65A4}"), Some("\u{6B23}"), Some("\u{6B3D}"), Some("\u{7434}"), Some("\u{7981}"),
            Some("\u{79BD}"), Some("\u{7B4B}"), Some("\u{7DCA}"), Some("\u{82B9}"), Some("\u{83CC}"), Some("\u{887F}"), Some("\u{895F}"), Some("\u{8B39}"),
            Some("\u{8FD1}"), Some("\u{91D1}"), Some("\u{541F}"), Some("\u{9280}"), Some("\u{4E5D}"), Some("\u{5036}"), Some("\u{53E5}"), Some("\u{533A}"),
            Some("\u{72D7}"), Some("\u{7396}"), Some("\u{77E9}"), Some("\u{82E6}"), Some("\u{8EAF}"), Some("\u{99C6}"), Some("\u{99C8}"), Some("\u{99D2}"),
            Some("\u{5177}"), Some("\u{611A}"), Some("\u{865E}"), Some("\u{55B0}"), Some("\u{7A7A}"), Some("\u{5076}"), Some("\u{5BD3}"), Some("\u{9047}"),
            Some("\u{9685}"), Some("\u{4E32}"), Some("\u{6ADB}"), Some("\u{91E7}"), Some("\u{5C51}"), Some("\u{5C48}"),
        ],
        // 1-23
        [
            Some("\u{6398}"), Some("\u{7A9F}"), Some("\u{6C93}"), Some("\u{9774}"), Some("\u{8F61}"), Some("\u{7AAA}"), Some("\u{718A}"), Some("\u{9688}"),
            Some("\u{7C82}"), Some("\u{6817}"), Some("\u{7E70}"), Some("\u{6851}"), Some("\u{936C}"), Some("\u{52F2}"), Some("\u{541B}"), Some("\u{85AB}"),
            Some("\u{8A13}"), Some("\u{7FA4}"), Some("\u{8ECD}"), Some("\u{90E1}"), Some("\u{5366}"), Some("\u{8888}"), Some("\u{7941}"), Some("\u{4FC2}"),
            Some("\u{50BE}"), Some("\u{5211}"), Some("\u{5144}"), Some("\u{5553}"), Some("\u{572D}"), Some("\u{73EA}"), Some("\u{578B}"), Some("\u{5951}"),
            Some("\u{5F62}"), Some("\u{5F84}"), Some("\u{6075}"), Some("\u{6176}"), Some("\u{6167}"), Some("\u{61A9}"), Some("\u{63B2}"), Some("\u{643A}"),
            Some("\u{656C}"), Some("\u{666F}"), Some("\u{6842}"), Some("\u{6E13}"), Some("\u{7566}"), Some("\u{7A3D}"), Some("\u{7CFB}"), Some("\u{7D4C}"),
            Some("\u{7D99}"), Some("\u{7E4B}"), Some("\u{7F6B}"), Some("\u{830E}"), Some("\u{834A}"), Some("\u{86CD}"), Some("\u{8A08}"), Some("\u{8A63}"),
            Some("\u{8B66}"), Some("\u{8EFD}"), Some("\u{981A}"), Some("\u{9D8F}"), Some("\u{82B8}"), Some("\u{8FCE}"), Some("\u{9BE8}"), Some("\u{5287}"),
            Some("\u{621F}"), Some("\u{6483}"), Some("\u{6FC0}"), Some("\u{9699}"), Some("\u{6841}"), Some("\u{5091}"), Some("\u{6B20}"), Some("\u{6C7A}"),
            Some("\u{6F54}"), Some("\u{7A74}"), Some("\u{7D50}"), Some("\u{8840}"), Some("\u{8A23}"), Some("\u{6708}"), Some("\u{4EF6}"), Some("\u{5039}"),
            Some("\u{5026}"), Some("\u{5065}"), Some("\u{517C}"), Some("\u{5238}"), Some("\u{5263}"), Some("\u{55A7}"), Some("\u{570F}"), Some("\u{5805}"),
            Some("\u{5ACC}"), Some("\u{5EFA}"), Some("\u{61B2}"), Some("\u{61F8}"), Some("\u{62F3}"), Some("\u{6372}"),
        ],
        // 1-24
        [
            Some("\u{691C}"), Some("\u{6A29}"), Some("\u{727D}"), Some("\u{72AC}"), Some("\u{732E}"), Some("\u{7814}"), Some("\u{786F}"), Some("\u{7D79}"),
            Some("\u{770C}"), Some("\u{80A9}"), Some("\u{898B}"), Some("\u{8B19}"), Some("\u{8CE2}"), Some("\u{8ED2}"), Some("\u{9063}"), Some("\u{9375}"),
            Some("\u{967A}"), Some("\u{9855}"), Some("\u{9A13}"), Some("\u{9E78}"), Some("\u{5143}"), Some("\u{539F}"), Some("\u{53B3}"), Some("\u{5E7B}"),
            Some("\u{5F26}"), Some("\u{6E1B}"), Some("\u{6E90}"), Some("\u{7384}"), Some("\u{73FE}"), Some("\u{7D43}"), Some("\u{8237}"), Some("\u{8A00}"),
            Some("\u{8AFA}"), Some("\u{9650}"), Some("\u{4E4E}"), Some("\u{500B}"), Some("\u{53E4}"), Some("\u{547C}"), Some("\u{56FA}"), Some("\u{59D1}"),
            Some("\u{5B64}"), Some("\u{5DF1}"), Some("\u{5EAB}"), Some("\u{5F27}"), Some("\u{6238}"), Some("\u{6545}"), Some("\u{67AF}"), Some("\u{6E56}"),
            Some("\u{72D0}"), Some("\u{7CCA}"), Some("\u{88B4}"), Some("\u{80A1}"), Some("\u{80E1}"), Some("\u{83F0}"), Some("\u{864E}"), Some("\u{8A87}"),
            Some("\u{8DE8}"), Some("\u{9237}"), Some("\u{96C7}"), Some("\u{9867}"), Some("\u{9F13}"), Some("\u{4E94}"), Some("\u{4E92}"), Some("\u{4F0D}"),
            Some("\u{5348}"), Some("\u{5449}"), Some("\u{543E}"), Some("\u{5A2F}"), Some("\u{5F8C}"), Some("\u{5FA1}"), Some("\u{609F}"), Some("\u{68A7}"),
            Some("\u{6A8E}"), Some("\u{745A}"), Some("\u{7881}"), Some("\u{8A9E}"), Some("\u{8AA4}"), Some("\u{8B77}"), Some("\u{9190}"), Some("\u{4E5E}"),
            Some("\u{9BC9}"), Some("\u{4EA4}"), Some("\u{4F7C}"), Some("\u{4FAF}"), Some("\u{5019}"), Some("\u{5016}"), Some("\u{5149}"), Some("\u{516C}"),
            Some("\u{529F}"), Some("\u{52B9}"), Some("\u{52FE}"), Some("\u{539A}"), Some("\u{53E3}"), Some("\u{5411}"),
        ],
        // 1-25
        [
            Some("\u{540E}"), Some("\u{5589}"), Some("\u{5751}"), Some("\u{57A2}"), Some("\u{597D}"), Some("\u{5B54}"), Some("\u{5B5D}"), Some("\u{5B8F}"),
            Some("\u{5DE5}"), Some("\u{5DE7}"), Some("\u{5DF7}"), Some("\u{5E78}"), Some("\u{5E83}"), Some("\u{5E9A}"), Some("\u{5EB7}"), Some("\u{5F18}"),
            Some("\u{6052}"), Some("\u{614C}"), Some("\u{6297}"), Some("\u{62D8}"), Some("\u{63A7}"), Some("\u{653B}"), Some("\u{6602}"), Some("\u{6643}"),
            Some("\u{66F4}"), Some("\u{676D}"), Some("\u{6821}"), Some("\u{6897}"), Some("\u{69CB}"), Some("\u{6C5F}"), Some("\u{6D2A}"), Some("\u{6D69}"),
            Some("\u{6E2F}"), Some("\u{6E9D}"), Some("\u{7532}"), Some("\u{7687}"), Some("\u{786C}"), Some("\u{7A3F}"), Some("\u{7CE0}"), Some("\u{7D05}"),
            Some("\u{7D18}"), Some("\u{7D5E}"), Some("\u{7DB1}"), Some("\u{8015}"), Some("\u{8003}"), Some("\u{80AF}"), Some("\u{80B1}"), Some("\u{8154}"),
            Some("\u{818F}"), Some("\u{822A}"), Some("\u{8352}"), Some("\u{884C}"), Some("\u{8861}"), Some("\u{8B1B}"), Some("\u{8CA2}"), Some("\u{8CFC}"),
            Some("\u{90CA}"), Some("\u{9175}"), Some("\u{9271}"), Some("\u{783F}"), Some("\u{92FC}"), Some("\u{95A4}"), Some("\u{964D}"), Some("\u{9805}"),
            Some("\u{9999}"), Some("\u{9AD8}"), Some("\u{9D3B}"), Some("\u{525B}"), Some("\u{52AB}"), Some("\u{53F7}"), Some("\u{5408}"), Some("\u{58D5}"),
            Some("\u{62F7}"), Some("\u{6FE0}"), Some("\u{8C6A}"), Some("\u{8F5F}"), Some("\u{9EB9}"), Some("\u{514B}"), Some("\u{523B}"), Some("\u{544A}"),
            Some("\u{56FD}"), Some("\u{7A40}"), Some("\u{9177}"), Some("\u{9D60}"), Some("\u{9ED2}"), Some("\u{7344}"), Some("\u{6F09}"), Some("\u{8170}"),
            Some("\u{7511}"), Some("\u{5FFD}"), Some("\u{60DA}"), Some("\u{9AA8}"), Some("\u{72DB}"), Some("\u{8FBC}"),
        ],
        // 1-26
        [
            Some("\u{6B64}"), Some("\u{9803}"), Some("\u{4ECA}"), Some("\u{56F0}"), Some("\u{5764}"), Some("\u{58BE}"), Some("\u{5A5A}"), Some("\u{6068}"),
            Some("\u{61C7}"), Some("\u{660F}"), Some("\u{6606}"), Some("\u{6839}"), Some("\u{68B1}"), Some("\u{6DF7}"), Some("\u{75D5}"), Some("\u{7D3A}"),
            Some("\u{826E}"), Some("\u{9B42}"), Some("\u{4E9B}"), Some("\u{4F50}"), Some("\u{53C9}"), Some("\u{5506}"), Some("\u{5D6F}"), Some("\u{5DE6}"),
            Some("\u{5DEE}"), Some("\u{67FB}"), Some("\u{6C99}"), Some("\u{7473}"), Some("\u{7802}"), Some("\u{8A50}"), Some("\u{9396}"), Some("\u{88DF}"),
            Some("\u{5750}"), Some("\u{5EA7}"), Some("\u{632B}"), Some("\u{50B5}"), Some("\u{50AC}"), Some("\u{518D}"), Some("\u{6700}"), Some("\u{54C9}"),
            Some("\u{585E}"), Some("\u{59BB}"), Some("\u{5BB0}"), Some("\u{5F69}"), Some("\u{624D}"), Some("\u{63A1}"), Some("\u{683D}"), Some("\u{6B73}"),
            Some("\u{6E08}"), Some("\u{707D}"), Some("\u{91C7}"), Some("\u{7280}"), Some("\u{7815}"), Some("\u{7826}"), Some("\u{796D}"), Some("\u{658E}"),
            Some("\u{7D30}"), Some("\u{83DC}"), Some("\u{88C1}"), Some("\u{8F09}"), Some("\u{969B}"), Some("\u{5264}"), Some("\u{5728}"), Some("\u{6750}"),
            Some("\u{7F6A}"), Some("\u{8CA1}"), Some("\u{51B4}"), Some("\u{5742}"), Some("\u{962A}"), Some("\u{583A}"), Some("\u{698A}"), Some("\u{80B4}"),
            Some("\u{54B2}"), Some("\u{5D0E}"), Some("\u{57FC}"), Some("\u{7895}"), Some("\u{9DFA}"), Some("\u{4F5C}"), Some("\u{524A}"), Some("\u{548B}"),
            Some("\u{643E}"), Some("\u{6628}"), Some("\u{6714}"), Some("\u{67F5}"), Some("\u{7A84}"), Some("\u{7B56}"), Some("\u{7D22}"), Some("\u{932F}"),
            Some("\u{685C}"), Some("\u{9BAD}"), Some("\u{7B39}"), Some("\u{5319}"), Some("\u{518A}"), Some("\u{5237}"),
        ],
        // 1-27
        [
            Some("\u{5BDF}"), Some("\u{62F6}"), Some("\u{64AE}"), Some("\u{64E6}"), Some("\u{672D}"), Some("\u{6BBA}"), Some("\u{85A9}"), Some("\u{96D1}"),
            Some("\u{7690}"), Some("\u{9BD6}"), Some("\u{634C}"), Some("\u{9306}"), Some("\u{9BAB}"), Some("\u{76BF}"), Some("\u{6652}"), Some("\u{4E09}"),
            Some("\u{5098}"), Some("\u{53C2}"), Some("\u{5C71}"), Some("\u{60E8}"), Some("\u{6492}"), Some("\u{6563}"), Some("\u{685F}"), Some("\u{71E6}"),
            Some("\u{73CA}"), Some("\u{7523}"), Some("\u{7B97}"), Some("\u{7E82}"), Some("\u{8695}"), Some("\u{8B83}"), Some("\u{8CDB}"), Some("\u{9178}"),
            Some("\u{9910}"), Some("\u{65AC}"), Some("\u{66AB}"), Some("\u{6B8B}"), Some("\u{4ED5}"), Some("\u{4ED4}"), Some("\u{4F3A}"), Some("\u{4F7F}"),
            Some("\u{523A}"), Some("\u{53F8}"), Some("\u{53F2}"), Some("\u{55E3}"), Some("\u{56DB}"), Some("\u{58EB}"), Some("\u{59CB}"), Some("\u{59C9}"),
            Some("\u{59FF}"), Some("\u{5B50}"), Some("\u{5C4D}"), Some("\u{5E02}"), Some("\u{5E2B}"), Some("\u{5FD7}"), Some("\u{601D}"), Some("\u{6307}"),
            Some("\u{652F}"), Some("\u{5B5C}"), Some("\u{65AF}"), Some("\u{65BD}"), Some("\u{65E8}"), Some("\u{679D}"), Some("\u{6B62}"), Some("\u{6B7B}"),
            Some("\u{6C0F}"), Some("\u{7345}"), Some("\u{7949}"), Some("\u{79C1}"), Some("\u{7CF8}"), Some("\u{7D19}"), Some("\u{7D2B}"), Some("\u{80A2}"),
            Some("\u{8102}"), Some("\u{81F3}"), Some("\u{8996}"), Some("\u{8A5E}"), Some("\u{8A69}"), Some("\u{8A66}"), Some("\u{8A8C}"), Some("\u{8AEE}"),
            Some("\u{8CC7}"), Some("\u{8CDC}"), Some("\u{96CC}"), Some("\u{98FC}"), Some("\u{6B6F}"), Some("\u{4E8B}"), Some("\u{4F3C}"), Some("\u{4F8D}"),
            Some("\u{5150}"), Some("\u{5B57}"), Some("\u{5BFA}"), Some("\u{6148}"), Some("\u{6301}"), Some("\u{6642}"),
        ],
        // 1-28
        [
            Some("\u{6B21}"), Some("\u{6ECB}"), Some("\u{6CBB}"), Some("\u{723E}"), Some("\u{74BD}"), Some("\u{75D4}"), Some("\u{78C1}"), Some("\u{793A}"),
            Some("\u{800C}"), Some("\u{8033}"), Some("\u{81EA}"), Some("\u{8494}"), Some("\u{8F9E}"), Some("\u{6C50}"), Some("\u{9E7F}"), Some("\u{5F0F}"),
            Some("\u{8B58}"), Some("\u{9D2B}"), Some("\u{7AFA}"), Some("\u{8EF8}"), Some("\u{5B8D}"), Some("\u{96EB}"), Some("\u{4E03}"), Some("\u{53F1}"),
            Some("\u{57F7}"), Some("\u{5931}"), Some("\u{5AC9}"), Some("\u{5BA4}"), Some("\u{6089}"), Some("\u{6E7F}"), Some("\u{6F06}"), Some("\u{75BE}"),
            Some("\u{8CEA}"), Some("\u{5B9F}"), Some("\u{8500}"), Some("\u{7BE0}"), Some("\u{5072}"), Some("\u{67F4}"), Some("\u{829D}"), Some("\u{5C61}"),
            Some("\u{854A}"), Some("\u{7E1E}"), Some("\u{820E}"), Some("\u{5199}"), Some("\u{5C04}"), Some("\u{6368}"), Some("\u{8D66}"), Some("\u{659C}"),
            Some("\u{716E}"), Some("\u{793E}"), Some("\u{7D17}"), Some("\u{8005}"), Some("\u{8B1D}"), Some("\u{8ECA}"), Some("\u{906E}"), Some("\u{86C7}"),
            Some("\u{90AA}"), Some("\u{501F}"), Some("\u{52FA}"), Some("\u{5C3A}"), Some("\u{6753}"), Some("\u{707C}"), Some("\u{7235}"), Some("\u{914C}"),
            Some("\u{91C8}"), Some("\u{932B}"), Some("\u{82E5}"), Some("\u{5BC2}"), Some("\u{5F31}"), Some("\u{60F9}"), Some("\u{4E3B}"), Some("\u{53D6}"),
            Some("\u{5B88}"), Some("\u{624B}"), Some("\u{6731}"), Some("\u{6B8A}"), Some("\u{72E9}"), Some("\u{73E0}"), Some("\u{7A2E}"), Some("\u{816B}"),
            Some("\u{8DA3}"), Some("\u{9152}"), Some("\u{9996}"), Some("\u{5112}"), Some("\u{53D7}"), Some("\u{546A}"), Some("\u{5BFF}"), Some("\u{6388}"),
            Some("\u{6A39}"), Some("\u{7DAC}"), Some("\u{9700}"), Some("\u{56DA}"), Some("\u{53CE}"), Some("\u{5468}"),
        ],
        // 1-29
        [
            Some("\u{5B97}"), Some("\u{5C31}"), Some("\u{5DDE}"), Some("\u{4FEE}"), Some("\u{6101}"), Some("\u{62FE}"), Some("\u{6D32}"), Some("\u{79C0}"),
            Some("\u{79CB}"), Some("\u{7D42}"), Some("\u{7E4D}"), Some("\u{7FD2}"), Some("\u{81ED}"), Some("\u{821F}"), Some("\u{8490}"), Some("\u{8846}"),
            Some("\u{8972}"), Some("\u{8B90}"), Some("\u{8E74}"), Some("\u{8F2F}"), Some("\u{9031}"), Some("\u{914B}"), Some("\u{916C}"), Some("\u{96C6}"),
            Some("\u{919C}"), Some("\u{4EC0}"), Some("\u{4F4F}"), Some("\u{5145}"), Some("\u{5341}"), Some("\u{5F93}"), Some("\u{620E}"), Some("\u{67D4}"),
            Some("\u{6C41}"), Some("\u{6E0B}"), Some("\u{7363}"), Some("\u{7E26}"), Some("\u{91CD}"), Some("\u{9283}"), Some("\u{53D4}"), Some("\u{5919}"),
            Some("\u{5BBF}"), Some("\u{6DD1}"), Some("\u{795D}"), Some("\u{7E2E}"), Some("\u{7C9B}"), Some("\u{587E}"), Some("\u{719F}"), Some("\u{51FA}"),
            Some("\u{8853}"), Some("\u{8FF0}"), Some("\u{4FCA}"), Some("\u{5CFB}"), Some("\u{6625}"), Some("\u{77AC}"), Some("\u{7AE3}"), Some("\u{821C}"),
            Some("\u{99FF}"), Some("\u{51C6}"), Some("\u{5FAA}"), Some("\u{65EC}"), Some("\u{696F}"), Some("\u{6B89}"), Some("\u{6DF3}"), Some("\u{6E96}"),
            Some("\u{6F64}"), Some("\u{76FE}"), Some("\u{7D14}"), Some("\u{5DE1}"), Some("\u{9075}"), Some("\u{9187}"), Some("\u{9806}"), Some("\u{51E6}"),
            Some("\u{521D}"), Some("\u{6240}"), Some("\u{6691}"), Some("\u{66D9}"), Some("\u{6E1A}"), Some("\u{5EB6}"), Some("\u{7DD2}"), Some("\u{7F72}"),
            Some("\u{66F8}"), Some("\u{85AF}"), Some("\u{85F7}"), Some("\u{8AF8}"), Some("\u{52A9}"), Some("\u{53D9}"), Some("\u{5973}"), Some("\u{5E8F}"),
            Some("\u{5F90}"), Some("\u{6055}"), Some("\u{92E4}"), Some("\u{9664}"), Some("\u{50B7}"), Some("\u{511F}"),
        ],
        // 1-30
        [
            Some("\u{52DD}"), Some("\u{5320}"), Some("\u{5347}"), Some("\u{53EC}"), Some("\u{54E8}"), Some("\u{5546}"), Some("\u{5531}"), Some("\u{5617}"),
            Some("\u{5968}"), Some("\u{59BE}"), Some("\u{5A3C}"), Some("\u{5BB5}"), Some("\u{5C06}"), Some("\u{5C0F}"), Some("\u{5C11}"), Some("\u{5C1A}"),
            Some("\u{5E84}"), Some("\u{5E8A}"), Some("\u{5EE0}"), Some("\u{5F70}"), Some("\u{627F}"), Some("\u{6284}"), Some("\u{62DB}"), Some("\u{638C}"),
            Some("\u{6377}"), Some("\u{6607}"), Some("\u{660C}"), Some("\u{662D}"), Some("\u{6676}"), Some("\u{677E}"), Some("\u{68A2}"), Some("\u{6A1F}"),
            Some("\u{6A35}"), Some("\u{6CBC}"), Some("\u{6D88}"), Some("\u{6E09}"), Some("\u{6E58}"), Some("\u{713C}"), Some("\u{7126}"), Some("\u{7167}"),
            Some("\u{75C7}"), Some("\u{7701}"), Some("\u{785D}"), Some("\u{7901}"), Some("\u{7965}"), Some("\u{79F0}"), Some("\u{7AE0}"), Some("\u{7B11}"),
            Some("\u{7CA7}"), Some("\u{7D39}"), Some("\u{8096}"), Some("\u{83D6}"), Some("\u{848B}"), Some("\u{8549}"), Some("\u{885D}"), Some("\u{88F3}"),
            Some("\u{8A1F}"), Some("\u{8A3C}"), Some("\u{8A54}"), Some("\u{8A73}"), Some("\u{8C61}"), Some("\u{8CDE}"), Some("\u{91A4}"), Some("\u{9266}"),
            Some("\u{937E}"), Some("\u{9418}"), Some("\u{969C}"), Some("\u{9798}"), Some("\u{4E0A}"), Some("\u{4E08}"), Some("\u{4E1E}"), Some("\u{4E57}"),
            Some("\u{5197}"), Some("\u{5270}"), Some("\u{57CE}"), Some("\u{5834}"), Some("\u{58CC}"), Some("\u{5B22}"), Some("\u{5E38}"), Some("\u{60C5}"),
            Some("\u{64FE}"), Some("\u{6761}"), Some("\u{6756}"), Some("\u{6D44}"), Some("\u{72B6}"), Some("\u{7573}"), Some("\u{7A63}"), Some("\u{84B8}"),
            Some("\u{8B72}"), Some("\u{91B8}"), Some("\u{9320}"), Some("\u{5631}"), Some("\u{57F4}"), Some("\u{98FE}"),
        ],
        // 1-31
        [
            Some("\u{62ED}"), Some("\u{690D}"), Some("\u{6B96}"), Some("\u{71ED}"), Some("\u{7E54}"), Some("\u{8077}"), Some("\u{8272}"), Some("\u{89E6}"),
            Some("\u{98DF}"), Some("\u{8755}"), Some("\u{8FB1}"), Some("\u{5C3B}"), Some("\u{4F38}"), Some("\u{4FE1}"), Some("\u{4FB5}"), Some("\u{5507}"),
            Some("\u{5A20}"), Some("\u{5BDD}"), Some("\u{5BE9}"), Some("\u{5FC3}"), Some("\u{614E}"), Some("\u{632F}"), Some("\u{65B0}"), Some("\u{664B}"),
            Some("\u{68EE}"), Some("\u{699B}"), Some("\u{6D78}"), Some("\u{6DF1}"), Some("\u{7533}"), Some("\u{75B9}"), Some("\u{771F}"), Some("\u{795E}"),
            Some("\u{79E6}"), Some("\u{7D33}"), Some("\u{81E3}"), Some("\u{82AF}"), Some("\u{85AA}"), Some("\u{89AA}"), Some("\u{8A3A}"), Some("\u{8EAB}"),
            Some("\u{8F9B}"), Some("\u{9032}"), Some("\u{91DD}"), Some("\u{9707}"), Some("\u{4EBA}"), Some("\u{4EC1}"), Some("\u{5203}"), Some("\u{5875}"),
            Some("\u{58EC}"), Some("\u{5C0B}"), Some("\u{751A}"), Some("\u{5C3D}"), Some("\u{814E}"), Some("\u{8A0A}"), Some("\u{8FC5}"), Some("\u{9663}"),
            Some("\u{976D}"), Some("\u{7B25}"), Some("\u{8ACF}"), Some("\u{9808}"), Some("\u{9162}"), Some("\u{56F3}"), Some("\u{53A8}"), Some("\u{9017}"),
            Some("\u{5439}"), Some("\u{5782}"), Some("\u{5E25}"), Some("\u{63A8}"), Some("\u{6C34}"), Some("\u{708A}"), Some("\u{7761}"), Some("\u{7C8B}"),
            Some("\u{7FE0}"), Some("\u{8870}"), Some("\u{9042}"), Some("\u{9154}"), Some("\u{9310}"), Some("\u{9318}"), Some("\u{968F}"), Some("\u{745E}"),
            Some("\u{9AC4}"), Some("\u{5D07}"), Some("\u{5D69}"), Some("\u{6570}"), Some("\u{67A2}"), Some("\u{8DA8}"), Some("\u{96DB}"), Some("\u{636E}"),
            Some("\u{6749}"), Some("\u{6919}"), Some("\u{83C5}"), Some("\u{9817}"), Some("\u{96C0}"), Some("\u{88FE}"),
        ],
        // 1-32
        [
            Some("\u{6F84}"), Some("\u{647A}"), Some("\u{5BF8}"), Some("\u{4E16}"), Some("\u{702C}"), Some("\u{755D}"), Some("\u{662F}"), Some("\u{51C4}"),
            Some("\u{5236}"), Some("\u{52E2}"), Some("\u{59D3}"), Some("\u{5F81}"), Some("\u{6027}"), Some("\u{6210}"), Some("\u{653F}"), Some("\u{6574}"),
            Some("\u{661F}"), Some("\u{6674}"), Some("\u{68F2}"), Some("\u{6816}"), Some("\u{6B63}"), Some("\u{6E05}"), Some("\u{7272}"), Some("\u{751F}"),
            Some("\u{76DB}"), Some("\u{7CBE}"), Some("\u{8056}"), Some("\u{58F0}"), Some("\u{88FD}"), Some("\u{897F}"), Some("\u{8AA0}"), Some("\u{8A93}"),
            Some("\u{8ACB}"), Some("\u{901D}"), Some("\u{9192}"), Some("\u{9752}"), Some("\u{9759}"), Some("\u{6589}"), Some("\u{7A0E}"), Some("\u{8106}"),
            Some("\u{96BB}"), Some("\u{5E2D}"), Some("\u{60DC}"), Some("\u{621A}"), Some("\u{65A5}"), Some("\u{6614}"), Some("\u{6790}"), Some("\u{77F3}"),
            Some("\u{7A4D}"), Some("\u{7C4D}"), Some("\u{7E3E}"), Some("\u{810A}"), Some("\u{8CAC}"), Some("\u{8D64}"), Some("\u{8DE1}"), Some("\u{8E5F}"),
            Some("\u{78A9}"), Some("\u{5207}"), Some("\u{62D9}"), Some("\u{63A5}"), Some("\u{6442}"), Some("\u{6298}"), Some("\u{8A2D}"), Some("\u{7A83}"),
            Some("\u{7BC0}"), Some("\u{8AAC}"), Some("\u{96EA}"), Some("\u{7D76}"), Some("\u{820C}"), Some("\u{8749}"), Some("\u{4ED9}"), Some("\u{5148}"),
            Some("\u{5343}"), Some("\u{5360}"), Some("\u{5BA3}"), Some("\u{5C02}"), Some("\u{5C16}"), Some("\u{5DDD}"), Some("\u{6226}"), Some("\u{6247}"),
            Some("\u{64B0}"), Some("\u{6813}"), Some("\u{6834}"), Some("\u{6CC9}"), Some("\u{6D45}"), Some("\u{6D17}"), Some("\u{67D3}"), Some("\u{6F5C}"),
            Some("\u{714E}"), Some("\u{717D}"), Some("\u{65CB}"), Some("\u{7A7F}"), Some("\u{7BAD}"), Some("\u{7DDA}"),
        ],
        // 1-33
        [
            Some("\u{7E4A}"), Some("\u{7FA8}"), Some("\u{817A}"), Some("\u{821B}"), Some("\u{8239}"), Some("\u{85A6}"), Some("\u{8A6E}"), Some("\u{8CCE}"),
            Some("\u{8DF5}"), Some("\u{9078}"), Some("\u{9077}"), Some("\u{92AD}"), Some("\u{9291}"), Some("\u{9583}"), Some("\u{9BAE}"), Some("\u{524D}"),
            Some("\u{5584}"), Some("\u{6F38}"), Some("\u{7136}"), Some("\u{5168}"), Some("\u{7985}"), Some("\u{7E55}"), Some("\u{81B3}"), Some("\u{7CCE}"),
            Some("\u{564C}"), Some("\u{5851}"), Some("\u{5CA8}"), Some("\u{63AA}"), Some("\u{66FE}"), Some("\u{66FD}"), Some("\u{695A}"), Some("\u{72D9}"),
            Some("\u{758F}"), Some("\u{758E}"), Some("\u{790E}"), Some("\u{7956}"), Some("\u{79DF}"), Some("\u{7C97}"), Some("\u{7D20}"), Some("\u{7D44}"),
            Some("\u{8607}"), Some("\u{8A34}"), Some("\u{963B}"), Some("\u{9061}"), Some("\u{9F20}"), Some("\u{50E7}"), Some("\u{5275}"), Some("\u{53CC}"),
            Some("\u{53E2}"), Some("\u{5009}"), Some("\u{55AA}"), Some("\u{58EE}"), Some("\u{594F}"), Some("\u{723D}"), Some("\u{5B8B}"), Some("\u{5C64}"),
            Some("\u{531D}"), Some("\u{60E3}"), Some("\u{60F3}"), Some("\u{635C}"), Some("\u{6383}"), Some("\u{633F}"), Some("\u{63BB}"), Some("\u{64CD}"),
            Some("\u{65E9}"), Some("\u{66F9}"), Some("\u{5DE3}"), Some("\u{69CD}"), Some("\u{69FD}"), Some("\u{6F15}"), Some("\u{71E5}"), Some("\u{4E89}"),
            Some("\u{75E9}"), Some("\u{76F8}"), Some("\u{7A93}"), Some("\u{7CDF}"), Some("\u{7DCF}"), Some("\u{7D9C}"), Some("\u{8061}"), Some("\u{8349}"),
            Some("\u{8358}"), Some("\u{846C}"), Some("\u{84BC}"), Some("\u{85FB}"), Some("\u{88C5}"), Some("\u{8D70}"), Some("\u{9001}"), Some("\u{906D}"),
            Some("\u{9397}"), Some("\u{971C}"), Some("\u{9A12}"), Some("\u{50CF}"), Some("\u{5897}"), Some("\u{618E}"),
        ],
        // 1-34
        [
            Some("\u{81D3}"), Some("\u{8535}"), Some("\u{8D08}"), Some("\u{9020}"), Some("\u{4FC3}"), Some("\u{5074}"), Some("\u{5247}"), Some("\u{5373}"),
            Some("\u{606F}"), Some("\u{6349}"), Some("\u{675F}"), Some("\u{6E2C}"), Some("\u{8DB3}"), Some("\u{901F}"), Some("\u{4FD7}"), Some("\u{5C5E}"),
            Some("\u{8CCA}"), Some("\u{65CF}"), Some("\u{7D9A}"), Some("\u{5352}"), Some("\u{8896}"), Some("\u{5176}"), Some("\u{63C3}"), Some("\u{5B58}"),
            Some("\u{5B6B}"), Some("\u{5C0A}"), Some("\u{640D}"), Some("\u{6751}"), Some("\u{905C}"), Some("\u{4ED6}"), Some("\u{591A}"), Some("\u{592A}"),
            Some("\u{6C70}"), Some("\u{8A51}"), Some("\u{553E}"), Some("\u{5815}"), Some("\u{59A5}"), Some("\u{60F0}"), Some("\u{6253}"), Some("\u{67C1}"),
            Some("\u{8235}"), Some("\u{6955}"), Some("\u{9640}"), Some("\u{99C4}"), Some("\u{9A28}"), Some("\u{4F53}"), Some("\u{5806}"), Some("\u{5BFE}"),
            Some("\u{8010}"), Some("\u{5CB1}"), Some("\u{5E2F}"), Some("\u{5F85}"), Some("\u{6020}"), Some("\u{614B}"), Some("\u{6234}"), Some("\u{66FF}"),
            Some("\u{6CF0}"), Some("\u{6EDE}"), Some("\u{80CE}"), Some("\u{817F}"), Some("\u{82D4}"), Some("\u{888B}"), Some("\u{8CB8}"), Some("\u{9000}"),
            Some("\u{902E}"), Some("\u{968A}"), Some("\u{9EDB}"), Some("\u{9BDB}"), Some("\u{4EE3}"), Some("\u{53F0}"), Some("\u{5927}"), Some("\u{7B2C}"),
            Some("\u{918D}"), Some("\u{984C}"), Some("\u{9DF9}"), Some("\u{6EDD}"), Some("\u{7027}"), Some("\u{5353}"), Some("\u{5544}"), Some("\u{5B85}"),
            Some("\u{6258}"), Some("\u{629E}"), Some("\u{62D3}"), Some("\u{6CA2}"), Some("\u{6FEF}"), Some("\u{7422}"), Some("\u{8A17}"), Some("\u{9438}"),
            Some("\u{6FC1}"), Some("\u{8AFE}"), Some("\u{8338}"), Some("\u{51E7}"), Some("\u{86F8}"), Some("\u{53EA}"),
        ],
        // 1-35
        [
            Some("\u{53E9}"), Some("\u{4F46}"), Some("\u{9054}"), Some("\u{8FB0}"), Some("\u{596A}"), Some("\u{8131}"), Some("\u{5DFD}"), Some("\u{7AEA}"),
            Some("\u{8FBF}"), Some("\u{68DA}"), Some("\u{8C37}"), Some("\u{72F8}"), Some("\u{9C48}"), Some("\u{6A3D}"), Some("\u{8AB0}"), Some("\u{4E39}"),
            Some("\u{5358}"), Some("\u{5606}"), Some("\u{5766}"), Some("\u{62C5}"), Some("\u{63A2}"), Some("\u{65E6}"), Some("\u{6B4E}"), Some("\u{6DE1}"),
            Some("\u{6E5B}"), Some("\u{70AD}"), Some("\u{77ED}"), Some("\u{7AEF}"), Some("\u{7BAA}"), Some("\u{7DBB}"), Some("\u{803D}"), Some("\u{80C6}"),
            Some("\u{86CB}"), Some("\u{8A95}"), Some("\u{935B}"), Some("\u{56E3}"), Some("\u{58C7}"), Some("\u{5F3E}"), Some("\u{65AD}"), Some("\u{6696}"),
            Some("\u{6A80}"), Some("\u{6BB5}"), Some("\u{7537}"), Some("\u{8AC7}"), Some("\u{5024}"), Some("\u{77E5}"), Some("\u{5730}"), Some("\u{5F1B}"),
            Some("\u{6065}"), Some("\u{667A}"), Some("\u{6C60}"), Some("\u{75F4}"), Some("\u{7A1A}"), Some("\u{7F6E}"), Some("\u{81F4}"), Some("\u{8718}"),
            Some("\u{9045}"), Some("\u{99B3}"), Some("\u{7BC9}"), Some("\u{755C}"), Some("\u{7AF9}"), Some("\u{7B51}"), Some("\u{84C4}"), Some("\u{9010}"),
            Some("\u{79E9}"), Some("\u{7A92}"), Some("\u{8336}"), Some("\u{5AE1}"), Some("\u{7740}"), Some("\u{4E2D}"), Some("\u{4EF2}"), Some("\u{5B99}"),
            Some("\u{5FE0}"), Some("\u{62BD}"), Some("\u{663C}"), Some("\u{67F1}"), Some("\u{6CE8}"), Some("\u{866B}"), Some("\u{8877}"), Some("\u{8A3B}"),
            Some("\u{914E}"), Some("\u{92F3}"), Some("\u{99D0}"), Some("\u{6A17}"), Some("\u{7026}"), Some("\u{732A}"), Some("\u{82E7}"), Some("\u{8457}"),
            Some("\u{8CAF}"), Some("\u{4E01}"), Some("\u{5146}"), Some("\u{51CB}"), Some("\u{558B}"), Some("\u{5BF5}"),
        ],
        // 1-36
        [
            Some("\u{5E16}"), Some("\u{5E33}"), Some("\u{5E81}"), Some("\u{5F14}"), Some("\u{5F35}"), Some("\u{5F6B}"), Some("\u{5FB4}"), Some("\u{61F2}"),
            Some("\u{6311}"), Some("\u{66A2}"), Some("\u{671D}"), Some("\u{6F6E}"), Some("\u{7252}"), Some("\u{753A}"), Some("\u{773A}"), Some("\u{8074}"),
            Some("\u{8139}"), Some("\u{8178}"), Some("\u{8776}"), Some("\u{8ABF}"), Some("\u{8ADC}"), Some("\u{8D85}"), Some("\u{8DF3}"), Some("\u{929A}"),
            Some("\u{9577}"), Some("\u{9802}"), Some("\u{9CE5}"), Some("\u{52C5}"), Some("\u{6357}"), Some("\u{76F4}"), Some("\u{6715}"), Some("\u{6C88}"),
            Some("\u{73CD}"), Some("\u{8CC3}"), Some("\u{93AE}"), Some("\u{9673}"), Some("\u{6D25}"), Some("\u{589C}"), Some("\u{690E}"), Some("\u{69CC}"),
            Some("\u{8FFD}"), Some("\u{939A}"), Some("\u{75DB}"), Some("\u{901A}"), Some("\u{585A}"), Some("\u{6802}"), Some("\u{63B4}"), Some("\u{69FB}"),
            Some("\u{4F43}"), Some("\u{6F2C}"), Some("\u{67D8}"), Some("\u{8FBB}"), Some("\u{8526}"), Some("\u{7DB4}"), Some("\u{9354}"), Some("\u{693F}"),
            Some("\u{6F70}"), Some("\u{576A}"), Some("\u{58F7}"), Some("\u{5B2C}"), Some("\u{7D2C}"), Some("\u{722A}"), Some("\u{540A}"), Some("\u{91E3}"),
            Some("\u{9DB4}"), Some("\u{4EAD}"), Some("\u{4F4E}"), Some("\u{505C}"), Some("\u{5075}"), Some("\u{5243}"), Some("\u{8C9E}"), Some("\u{5448}"),
            Some("\u{5824}"), Some("\u{5B9A}"), Some("\u{5E1D}"), Some("\u{5E95}"), Some("\u{5EAD}"), Some("\u{5EF7}"), Some("\u{5F1F}"), Some("\u{608C}"),
            Some("\u{62B5}"), Some("\u{633A}"), Some("\u{63D0}"), Some("\u{68AF}"), Some("\u{6C40}"), Some("\u{7887}"), Some("\u{798E}"), Some("\u{7A0B}"),
            Some("\u{7DE0}"), Some("\u{8247}"), Some("\u{8A02}"), Some("\u{8AE6}"), Some("\u{8E44}"), Some("\u{9013}"),
        ],
        // 1-37
        [
            Some("\u{90B8}"), Some("\u{912D}"), Some("\u{91D8}"), Some("\u{9F0E}"), Some("\u{6CE5}"), Some("\u{6458}"), Some("\u{64E2}"), Some("\u{6575}"),
            Some("\u{6EF4}"), Some("\u{7684}"), Some("\u{7B1B}"), Some("\u{9069}"), Some("\u{93D1}"), Some("\u{6EBA}"), Some("\u{54F2}"), Some("\u{5FB9}"),
            Some("\u{64A4}"), Some("\u{8F4D}"), Some("\u{8FED}"), Some("\u{9244}"), Some("\u{5178}"), Some("\u{586B}"), Some("\u{5929}"), Some("\u{5C55}"),
            Some("\u{5E97}"), Some("\u{6DFB}"), Some("\u{7E8F}"), Some("\u{751C}"), Some("\u{8CBC}"), Some("\u{8EE2}"), Some("\u{985B}"), Some("\u{70B9}"),
            Some("\u{4F1D}"), Some("\u{6BBF}"), Some("\u{6FB1}"), Some("\u{7530}"), Some("\u{96FB}"), Some("\u{514E}"), Some("\u{5410}"), Some("\u{5835}"),
            Some("\u{5857}"), Some("\u{59AC}"), Some("\u{5C60}"), Some("\u{5F92}"), Some("\u{6597}"), Some("\u{675C}"), Some("\u{6E21}"), Some("\u{767B}"),
            Some("\u{83DF}"), Some("\u{8CED}"), Some("\u{9014}"), Some("\u{90FD}"), Some("\u{934D}"), Some("\u{7825}"), Some("\u{783A}"), Some("\u{52AA}"),
            Some("\u{5EA6}"), Some("\u{571F}"), Some("\u{5974}"), Some("\u{6012}"), Some("\u{5012}"), Some("\u{515A}"), Some("\u{51AC}"), Some("\u{51CD}"),
            Some("\u{5200}"), Some("\u{5510}"), Some("\u{5854}"), Some("\u{5858}"), Some("\u{5957}"), Some("\u{5B95}"), Some("\u{5CF6}"), Some("\u{5D8B}"),
            Some("\u{60BC}"), Some("\u{6295}"), Some("\u{642D}"), Some("\u{6771}"), Some("\u{6843}"), Some("\u{68BC}"), Some("\u{68DF}"), Some("\u{76D7}"),
            Some("\u{6DD8}"), Some("\u{6E6F}"), Some("\u{6D9B}"), Some("\u{706F}"), Some("\u{71C8}"), Some("\u{5F53}"), Some("\u{75D8}"), Some("\u{7977}"),
            Some("\u{7B49}"), Some("\u{7B54}"), Some("\u{7B52}"), Some("\u{7CD6}"), Some("\u{7D71}"), Some("\u{5230}"),
        ],
        // 1-38
        [
            Some("\u{8463}"), Some("\u{8569}"), Some("\u{85E4}"), Some("\u{8A0E}"), Some("\u{8B04}"), Some("\u{8C46}"), Some("\u{8E0F}"), Some("\u{9003}"),
            Some("\u{900F}"), Some("\u{9419}"), Some("\u{9676}"), Some("\u{982D}"), Some("\u{9A30}"), Some("\u{95D8}"), Some("\u{50CD}"), Some("\u{52D5}"),
            Some("\u{540C}"), Some("\u{5802}"), Some("\u{5C0E}"), Some("\u{61A7}"), Some("\u{649E}"), Some("\u{6D1E}"), Some("\u{77B3}"), Some("\u{7AE5}"),
            Some("\u{80F4}"), Some("\u{8404}"), Some("\u{9053}"), Some("\u{9285}"), Some("\u{5CE0}"), Some("\u{9D07}"), Some("\u{533F}"), Some("\u{5F97}"),
            Some("\u{5FB3}"), Some("\u{6D9C}"), Some("\u{7279}"), Some("\u{7763}"), Some("\u{79BF}"), Some("\u{7BE4}"), Some("\u{6BD2}"), Some("\u{72EC}"),
            Some("\u{8AAD}"), Some("\u{6803}"), Some("\u{6A61}"), Some("\u{51F8}"), Some("\u{7A81}"), Some("\u{6934}"), Some("\u{5C4A}"), Some("\u{9CF6}"),
            Some("\u{82EB}"), Some("\u{5BC5}"), Some("\u{9149}"), Some("\u{701E}"), Some("\u{5678}"), Some("\u{5C6F}"), Some("\u{60C7}"), Some("\u{6566}"),
            Some("\u{6C8C}"), Some("\u{8C5A}"), Some("\u{9041}"), Some("\u{9813}"), Some("\u{5451}"), Some("\u{66C7}"), Some("\u{920D}"), Some("\u{5948}"),
            Some("\u{90A3}"), Some("\u{5185}"), Some("\u{4E4D}"), Some("\u{51EA}"), Some("\u{8599}"), Some("\u{8B0E}"), Some("\u{7058}"), Some("\u{637A}"),
            Some("\u{934B}"), Some("\u{6962}"), Some("\u{99B4}"), Some("\u{7E04}"), Some("\u{7577}"), Some("\u{5357}"), Some("\u{6960}"), Some("\u{8EDF}"),
            Some("\u{96E3}"), Some("\u{6C5D}"), Some("\u{4E8C}"), Some("\u{5C3C}"), Some("\u{5F10}"), Some("\u{8FE9}"), Some("\u{5302}"), Some("\u{8CD1}"),
            Some("\u{8089}"), Some("\u{8679}"), Some("\u{5EFF}"), Some("\u{65E5}"), Some("\u{4E73}"), Some("\u{5165}"),
        ],
        // 1-39
        [
            Some("\u{5982}"), Some("\u{5C3F}"), Some("\u{97EE}"), Some("\u{4EFB}"), Some("\u{598A}"), Some("\u{5FCD}"), Some("\u{8A8D}"), Some("\u{6FE1}"),
            Some("\u{79B0}"), Some("\u{7962}"), Some("\u{5BE7}"), Some("\u{8471}"), Some("\u{732B}"), Some("\u{71B1}"), Some("\u{5E74}"), Some("\u{5FF5}"),
            Some("\u{637B}"), Some("\u{649A}"), Some("\u{71C3}"), Some("\u{7C98}"), Some("\u{4E43}"), Some("\u{5EFC}"), Some("\u{4E4B}"), Some("\u{57DC}"),
            Some("\u{56A2}"), Some("\u{60A9}"), Some("\u{6FC3}"), Some("\u{7D0D}"), Some("\u{80FD}"), Some("\u{8133}"), Some("\u{81BF}"), Some("\u{8FB2}"),
            Some("\u{8997}"), Some("\u{86A4}"), Some("\u{5DF4}"), Some("\u{628A}"), Some("\u{64AD}"), Some("\u{8987}"), Some("\u{6777}"), Some("\u{6CE2}"),
            Some("\u{6D3E}"), Some("\u{7436}"), Some("\u{7834}"), Some("\u{5A46}"), Some("\u{7F75}"), Some("\u{82AD}"), Some("\u{99AC}"), Some("\u{4FF3}"),
            Some("\u{5EC3}"), Some("\u{62DD}"), Some("\u{6392}"), Some("\u{6557}"), Some("\u{676F}"), Some("\u{76C3}"), Some("\u{724C}"), Some("\u{80CC}"),
            Some("\u{80BA}"), Some("\u{8F29}"), Some("\u{914D}"), Some("\u{500D}"), Some("\u{57F9}"), Some("\u{5A92}"), Some("\u{6885}"), Some("\u{6973}"),
            Some("\u{7164}"), Some("\u{72FD}"), Some("\u{8CB7}"), Some("\u{58F2}"), Some("\u{8CE0}"), Some("\u{966A}"), Some("\u{9019}"), Some("\u{877F}"),
            Some("\u{79E4}"), Some("\u{77E7}"), Some("\u{8429}"), Some("\u{4F2F}"), Some("\u{5265}"), Some("\u{535A}"), Some("\u{62CD}"), Some("\u{67CF}"),
            Some("\u{6CCA}"), Some("\u{767D}"), Some("\u{7B94}"), Some("\u{7C95}"), Some("\u{8236}"), Some("\u{8584}"), Some("\u{8FEB}"), Some("\u{66DD}"),
            Some("\u{6F20}"), Some("\u{7206}"), Some("\u{7E1B}"), Some("\u{83AB}"), Some("\u{99C1}"), Some("\u{9EA6}"),
        ],
        // 1-40
        [
            Some("\u{51FD}"), Some("\u{7BB1}"), Some("\u{7872}"), Some("\u{7BB8}"), Some("\u{8087}"), Some("\u{7B48}"), Some("\u{6AE8}"), Some("\u{5E61}"),
            Some("\u{808C}"), Some("\u{7551}"), Some("\u{7560}"), Some("\u{516B}"), Some("\u{9262}"), Some("\u{6E8C}"), Some("\u{767A}"), Some("\u{9197}"),
            Some("\u{9AEA}"), Some("\u{4F10}"), Some("\u{7F70}"), Some("\u{629C}"), Some("\u{7B4F}"), Some("\u{95A5}"), Some("\u{9CE9}"), Some("\u{567A}"),
            Some("\u{5859}"), Some("\u{86E4}"), Some("\u{96BC}"), Some("\u{4F34}"), Some("\u{5224}"), Some("\u{534A}"), Some("\u{53CD}"), Some("\u{53DB}"),
            Some("\u{5E06}"), Some("\u{642C}"), Some("\u{6591}"), Some("\u{677F}"), Some("\u{6C3E}"), Some("\u{6C4E}"), Some("\u{7248}"), Some("\u{72AF}"),
            Some("\u{73ED}"), Some("\u{7554}"), Some("\u{7E41}"), Some("\u{822C}"), Some("\u{85E9}"), Some("\u{8CA9}"), Some("\u{7BC4}"), Some("\u{91C6}"),
            Some("\u{7169}"), Some("\u{9812}"), Some("\u{98EF}"), Some("\u{633D}"), Some("\u{6669}"), Some("\u{756A}"), Some("\u{76E4}"), Some("\u{78D0}"),
            Some("\u{8543}"), Some("\u{86EE}"), Some("\u{532A}"), Some("\u{5351}"), Some("\u{5426}"), Some("\u{5983}"), Some("\u{5E87}"), Some("\u{5F7C}"),
            Some("\u{60B2}"), Some("\u{6249}"), Some("\u{6279}"), Some("\u{62AB}"), Some("\u{6590}"), Some("\u{6BD4}"), Some("\u{6CCC}"), Some("\u{75B2}"),
            Some("\u{76AE}"), Some("\u{7891}"), Some("\u{79D8}"), Some("\u{7DCB}"), Some("\u{7F77}"), Some("\u{80A5}"), Some("\u{88AB}"), Some("\u{8AB9}"),
            Some("\u{8CBB}"), Some("\u{907F}"), Some("\u{975E}"), Some("\u{98DB}"), Some("\u{6A0B}"), Some("\u{7C38}"), Some("\u{5099}"), Some("\u{5C3E}"),
            Some("\u{5FAE}"), Some("\u{6787}"), Some("\u{6BD8}"), Some("\u{7435}"), Some("\u{7709}"), Some("\u{7F8E}"),
        ],
        // 1-41
        [
            Some("\u{9F3B}"), Some("\u{67CA}"), Some("\u{7A17}"), Some("\u{5339}"), Some("\u{758B}"), Some("\u{9AED}"), Some("\u{5F66}"), Some("\u{819D}"),
            Some("\u{83F1}"), Some("\u{8098}"), Some("\u{5F3C}"), Some("\u{5FC5}"), Some("\u{7562}"), Some("\u{7B46}"), Some("\u{903C}"), Some("\u{6867}"),
            Some("\u{59EB}"), Some("\u{5A9B}"), Some("\u{7D10}"), Some("\u{767E}"), Some("\u{8B2C}"), Some("\u{4FF5}"), Some("\u{5F6A}"), Some("\u{6A19}"),
            Some("\u{6C37}"), Some("\u{6F02}"), Some("\u{74E2}"), Some("\u{7968}"), Some("\u{8868}"), Some("\u{8A55}"), Some("\u{8C79}"), Some("\u{5EDF}"),
            Some("\u{63CF}"), Some("\u{75C5}"), Some("\u{79D2}"), Some("\u{82D7}"), Some("\u{9328}"), Some("\u{92F2}"), Some("\u{849C}"), Some("\u{86ED}"),
            Some("\u{9C2D}"), Some("\u{54C1}"), Some("\u{5F6C}"), Some("\u{658C}"), Some("\u{6D5C}"), Some("\u{7015}"), Some("\u{8CA7}"), Some("\u{8CD3}"),
            Some("\u{983B}"), Some("\u{654F}"), Some("\u{74F6}"), Some("\u{4E0D}"), Some("\u{4ED8}"), Some("\u{57E0}"), Some("\u{592B}"), Some("\u{5A66}"),
            Some("\u{5BCC}"), Some("\u{51A8}"), Some("\u{5E03}"), Some("\u{5E9C}"), Some("\u{6016}"), Some("\u{6276}"), Some("\u{6577}"), Some("\u{65A7}"),
            Some("\u{666E}"), Some("\u{6D6E}"), Some("\u{7236}"), Some("\u{7B26}"), Some("\u{8150}"), Some("\u{819A}"), Some("\u{8299}"), Some("\u{8B5C}"),
            Some("\u{8CA0}"), Some("\u{8CE6}"), Some("\u{8D74}"), Some("\u{961C}"), Some("\u{9644}"), Some("\u{4FAE}"), Some("\u{64AB}"), Some("\u{6B66}"),
            Some("\u{821E}"), Some("\u{8461}"), Some("\u{856A}"), Some("\u{90E8}"), Some("\u{5C01}"), Some("\u{6953}"), Some("\u{98A8}"), Some("\u{847A}"),
            Some("\u{8557}"), Some("\u{4F0F}"), Some("\u{526F}"), Some("\u{5FA9}"), Some("\u{5E45}"), Some("\u{670D}"),
        ],
        // 1-42
        [
            Some("\u{798F}"), Some("\u{8179}"), Some("\u{8907}"), Some("\u{8986}"), Some("\u{6DF5}"), Some("\u{5F17}"), Some("\u{6255}"), Some("\u{6CB8}"),
            Some("\u{4ECF}"), Some("\u{7269}"), Some("\u{9B92}"), Some("\u{5206}"), Some("\u{543B}"), Some("\u{5674}"), Some("\u{58B3}"), Some("\u{61A4}"),
            Some("\u{626E}"), Some("\u{711A}"), Some("\u{596E}"), Some("\u{7C89}"), Some("\u{7CDE}"), Some("\u{7D1B}"), Some("\u{96F0}"), Some("\u{6587}"),
            Some("\u{805E}"), Some("\u{4E19}"), Some("\u{4F75}"), Some("\u{5175}"), Some("\u{5840}"), Some("\u{5E63}"), Some("\u{5E73}"), Some("\u{5F0A}"),
            Some("\u{67C4}"), Some("\u{4E26}"), Some("\u{853D}"), Some("\u{9589}"), Some("\u{965B}"), Some("\u{7C73}"), Some("\u{9801}"), Some("\u{50FB}"),
            Some("\u{58C1}"), Some("\u{7656}"), Some("\u{78A7}"), Some("\u{5225}"), Some("\u{77A5}"), Some("\u{8511}"), Some("\u{7B86}"), Some("\u{504F}"),
            Some("\u{5909}"), Some("\u{7247}"), Some("\u{7BC7}"), Some("\u{7DE8}"), Some("\u{8FBA}"), Some("\u{8FD4}"), Some("\u{904D}"), Some("\u{4FBF}"),
            Some("\u{52C9}"), Some("\u{5A29}"), Some("\u{5F01}"), Some("\u{97AD}"), Some("\u{4FDD}"), Some("\u{8217}"), Some("\u{92EA}"), Some("\u{5703}"),
            Some("\u{6355}"), Some("\u{6B69}"), Some("\u{752B}"), Some("\u{88DC}"), Some("\u{8F14}"), Some("\u{7A42}"), Some("\u{52DF}"), Some("\u{5893}"),
            Some("\u{6155}"), Some("\u{620A}"), Some("\u{66AE}"), Some("\u{6BCD}"), Some("\u{7C3F}"), Some("\u{83E9}"), Some("\u{5023}"), Some("\u{4FF8}"),
            Some("\u{5305}"), Some("\u{5446}"), Some("\u{5831}"), Some("\u{5949}"), Some("\u{5B9D}"), Some("\u{5CF0}"), Some("\u{5CEF}"), Some("\u{5D29}"),
            Some("\u{5E96}"), Some("\u{62B1}"), Some("\u{6367}"), Some("\u{653E}"), Some("\u{65B9}"), Some("\u{670B}"),
        ],
        // 1-43
        [
            Some("\u{6CD5}"), Some("\u{6CE1}"), Some("\u{70F9}"), Some("\u{7832}"), Some("\u{7E2B}"), Some("\u{80DE}"), Some("\u{82B3}"), Some("\u{840C}"),
            Some("\u{84EC}"), Some("\u{8702}"), Some("\u{8912}"), Some("\u{8A2A}"), Some("\u{8C4A}"), Some("\u{90A6}"), Some("\u{92D2}"), Some("\u{98FD}"),
            Some("\u{9CF3}"), Some("\u{9D6C}"), Some("\u{4E4F}"), Some("\u{4EA1}"), Some("\u{508D}"), Some("\u{5256}"), Some("\u{574A}"), Some("\u{59A8}"),
            Some("\u{5E3D}"), Some("\u{5FD8}"), Some("\u{5FD9}"), Some("\u{623F}"), Some("\u{66B4}"), Some("\u{671B}"), Some("\u{67D0}"), Some("\u{68D2}"),
            Some("\u{5192}"), Some("\u{7D21}"), Some("\u{80AA}"), Some("\u{81A8}"), Some("\u{8B00}"), Some("\u{8C8C}"), Some("\u{8CBF}"), Some("\u{927E}"),
            Some("\u{9632}"), Some("\u{5420}"), Some("\u{982C}"), Some("\u{5317}"), Some("\u{50D5}"), Some("\u{535C}"), Some("\u{58A8}"), Some("\u{64B2}"),
            Some("\u{6734}"), Some("\u{7267}"), Some("\u{7766}"), Some("\u{7A46}"), Some("\u{91E6}"), Some("\u{52C3}"), Some("\u{6CA1}"), Some("\u{6B86}"),
            Some("\u{5800}"), Some("\u{5E4C}"), Some("\u{5954}"), Some("\u{672C}"), Some("\u{7FFB}"), Some("\u{51E1}"), Some("\u{76C6}"), Some("\u{6469}"),
            Some("\u{78E8}"), Some("\u{9B54}"), Some("\u{9EBB}"), Some("\u{57CB}"), Some("\u{59B9}"), Some("\u{6627}"), Some("\u{679A}"), Some("\u{6BCE}"),
            Some("\u{54E9}"), Some("\u{69D9}"), Some("\u{5E55}"), Some("\u{819C}"), Some("\u{6795}"), Some("\u{9BAA}"), Some("\u{67FE}"), Some("\u{9C52}"),
            Some("\u{685D}"), Some("\u{4EA6}"), Some("\u{4FE3}"), Some("\u{53C8}"), Some("\u{62B9}"), Some("\u{672B}"), Some("\u{6CAB}"), Some("\u{8FC4}"),
            Some("\u{4FAD}"), Some("\u{7E6D}"), Some("\u{9EBF}"), Some("\u{4E07}"), Some("\u{6162}"), Some("\u{6E80}"),
        ],
        // 1-44
        [
            Some("\u{6F2B}"), Some("\u{8513}"), Some("\u{5473}"), Some("\u{672A}"), Some("\u{9B45}"), Some("\u{5DF3}"), Some("\u{7B95}"), Some("\u{5CAC}"),
            Some("\u{5BC6}"), Some("\u{871C}"), Some("\u{6E4A}"), Some("\u{84D1}"), Some("\u{7A14}"), Some("\u{8108}"), Some("\u{5999}"), Some("\u{7C8D}"),
            Some("\u{6C11}"), Some("\u{7720}"), Some("\u{52D9}"), Some("\u{5922}"), Some("\u{7121}"), Some("\u{725F}"), Some("\u{77DB}"), Some("\u{9727}"),
            Some("\u{9D61}"), Some("\u{690B}"), Some("\u{5A7F}"), Some("\u{5A18}"), Some("\u{51A5}"), Some("\u{540D}"), Some("\u{547D}"), Some("\u{660E}"),
            Some("\u{76DF}"), Some("\u{8FF7}"), Some("\u{9298}"), Some("\u{9CF4}"), Some("\u{59EA}"), Some("\u{725D}"), Some("\u{6EC5}"), Some("\u{514D}"),
            Some("\u{68C9}"), Some("\u{7DBF}"), Some("\u{7DEC}"), Some("\u{9762}"), Some("\u{9EBA}"), Some("\u{6478}"), Some("\u{6A21}"), Some("\u{8302}"),
            Some("\u{5984}"), Some("\u{5B5F}"), Some("\u{6BDB}"), Some("\u{731B}"), Some("\u{76F2}"), Some("\u{7DB2}"), Some("\u{8017}"), Some("\u{8499}"),
            Some("\u{5132}"), Some("\u{6728}"), Some("\u{9ED9}"), Some("\u{76EE}"), Some("\u{6762}"), Some("\u{52FF}"), Some("\u{9905}"), Some("\u{5C24}"),
            Some("\u{623B}"), Some("\u{7C7E}"), Some("\u{8CB0}"), Some("\u{554F}"), Some("\u{60B6}"), Some("\u{7D0B}"), Some("\u{9580}"), Some("\u{5301}"),
            Some("\u{4E5F}"), Some("\u{51B6}"), Some("\u{591C}"), Some("\u{723A}"), Some("\u{8036}"), Some("\u{91CE}"), Some("\u{5F25}"), Some("\u{77E2}"),
            Some("\u{5384}"), Some("\u{5F79}"), Some("\u{7D04}"), Some("\u{85AC}"), Some("\u{8A33}"), Some("\u{8E8D}"), Some("\u{9756}"), Some("\u{67F3}"),
            Some("\u{85AE}"), Some("\u{9453}"), Some("\u{6109}"), Some("\u{6108}"), Some("\u{6CB9}"), Some("\u{7652}"),
        ],
        // 1-45
        [
            Some("\u{8AED}"), Some("\u{8F38}"), Some("\u{552F}"), Some("\u{4F51}"), Some("\u{512A}"), Some("\u{52C7}"), Some("\u{53CB}"), Some("\u{5BA5}"),
            Some("\u{5E7D}"), Some("\u{60A0}"), Some("\u{6182}"), Some("\u{63D6}"), Some("\u{6709}"), Some("\u{67DA}"), Some("\u{6E67}"), Some("\u{6D8C}"),
            Some("\u{7336}"), Some("\u{7337}"), Some("\u{7531}"), Some("\u{7950}"), Some("\u{88D5}"), Some("\u{8A98}"), Some("\u{904A}"), Some("\u{9091}"),
            Some("\u{90F5}"), Some("\u{96C4}"), Some("\u{878D}"), Some("\u{5915}"), Some("\u{4E88}"), Some("\u{4F59}"), Some("\u{4E0E}"), Some("\u{8A89}"),
            Some("\u{8F3F}"), Some("\u{9810}"), Some("\u{50AD}"), Some("\u{5E7C}"), Some("\u{5996}"), Some("\u{5BB9}"), Some("\u{5EB8}"), Some("\u{63DA}"),
            Some("\u{63FA}"), Some("\u{64C1}"), Some("\u{66DC}"), Some("\u{694A}"), Some("\u{69D8}"), Some("\u{6D0B}"), Some("\u{6EB6}"), Some("\u{7194}"),
            Some("\u{7528}"), Some("\u{7AAF}"), Some("\u{7F8A}"), Some("\u{8000}"), Some("\u{8449}"), Some("\u{84C9}"), Some("\u{8981}"), Some("\u{8B21}"),
            Some("\u{8E0A}"), Some("\u{9065}"), Some("\u{967D}"), Some("\u{990A}"), Some("\u{617E}"), Some("\u{6291}"), Some("\u{6B32}"), Some("\u{6C83}"),
            Some("\u{6D74}"), Some("\u{7FCC}"), Some("\u{7FFC}"), Some("\u{6DC0}"), Some("\u{7F85}"), Some("\u{87BA}"), Some("\u{88F8}"), Some("\u{6765}"),
            Some("\u{83B1}"), Some("\u{983C}"), Some("\u{96F7}"), Some("\u{6D1B}"), Some("\u{7D61}"), Some("\u{843D}"), Some("\u{916A}"), Some("\u{4E71}"),
            Some("\u{5375}"), Some("\u{5D50}"), Some("\u{6B04}"), Some("\u{6FEB}"), Some("\u{85CD}"), Some("\u{862D}"), Some("\u{89A7}"), Some("\u{5229}"),
            Some("\u{540F}"), Some("\u{5C65}"), Some("\u{674E}"), Some("\u{68A8}"), Some("\u{7406}"), Some("\u{7483}"),
        ],
        // 1-46
        [
            Some("\u{75E2}"), Some("\u{88CF}"), Some("\u{88E1}"), Some("\u{91CC}"), Some("\u{96E2}"), Some("\u{9678}"), Some("\u{5F8B}"), Some("\u{7387}"),
            Some("\u{7ACB}"), Some("\u{844E}"), Some("\u{63A0}"), Some("\u{7565}"), Some("\u{5289}"), Some("\u{6D41}"), Some("\u{6E9C}"), Some("\u{7409}"),
            Some("\u{7559}"), Some("\u{786B}"), Some("\u{7C92}"), Some("\u{9686}"), Some("\u{7ADC}"), Some("\u{9F8D}"), Some("\u{4FB6}"), Some("\u{616E}"),
            Some("\u{65C5}"), Some("\u{865C}"), Some("\u{4E86}"), Some("\u{4EAE}"), Some("\u{50DA}"), Some("\u{4E21}"), Some("\u{51CC}"), Some("\u{5BEE}"),
            Some("\u{6599}"), Some("\u{6881}"), Some("\u{6DBC}"), Some("\u{731F}"), Some("\u{7642}"), Some("\u{77AD}"), Some("\u{7A1C}"), Some("\u{7CE7}"),
            Some("\u{826F}"), Some("\u{8AD2}"), Some("\u{907C}"), Some("\u{91CF}"), Some("\u{9675}"), Some("\u{9818}"), Some("\u{529B}"), Some("\u{7DD1}"),
            Some("\u{502B}"), Some("\u{5398}"), Some("\u{6797}"), Some("\u{6DCB}"), Some("\u{71D0}"), Some("\u{7433}"), Some("\u{81E8}"), Some("\u{8F2A}"),
            Some("\u{96A3}"), Some("\u{9C57}"), Some("\u{9E9F}"), Some("\u{7460}"), Some("\u{5841}"), Some("\u{6D99}"), Some("\u{7D2F}"), Some("\u{985E}"),
            Some("\u{4EE4}"), Some("\u{4F36}"), Some("\u{4F8B}"), Some("\u{51B7}"), Some("\u{52B1}"), Some("\u{5DBA}"), Some("\u{601C}"), Some("\u{73B2}"),
            Some("\u{793C}"), Some("\u{82D3}"), Some("\u{9234}"), Some("\u{96B7}"), Some("\u{96F6}"), Some("\u{970A}"), Some("\u{9E97}"), Some("\u{9F62}"),
            Some("\u{66A6}"), Some("\u{6B74}"), Some("\u{5217}"), Some("\u{52A3}"), Some("\u{70C8}"), Some("\u{88C2}"), Some("\u{5EC9}"), Some("\u{604B}"),
            Some("\u{6190}"), Some("\u{6F23}"), Some("\u{7149}"), Some("\u{7C3E}"), Some("\u{7DF4}"), Some("\u{806F}"),
        ],
        // 1-47
        [
            Some("\u{84EE}"), Some("\u{9023}"), Some("\u{932C}"), Some("\u{5442}"), Some("\u{9B6F}"), Some("\u{6AD3}"), Some("\u{7089}"), Some("\u{8CC2}"),
            Some("\u{8DEF}"), Some("\u{9732}"), Some("\u{52B4}"), Some("\u{5A41}"), Some("\u{5ECA}"), Some("\u{5F04}"), Some("\u{6717}"), Some("\u{697C}"),
            Some("\u{6994}"), Some("\u{6D6A}"), Some("\u{6F0F}"), Some("\u{7262}"), Some("\u{72FC}"), Some("\u{7BED}"), Some("\u{8001}"), Some("\u{807E}"),
            Some("\u{874B}"), Some("\u{90CE}"), Some("\u{516D}"), Some("\u{9E93}"), Some("\u{7984}"), Some("\u{808B}"), Some("\u{9332}"), Some("\u{8AD6}"),
            Some("\u{502D}"), Some("\u{548C}"), Some("\u{8A71}"), Some("\u{6B6A}"), Some("\u{8CC4}"), Some("\u{8107}"), Some("\u{60D1}"), Some("\u{67A0}"),
            Some("\u{9DF2}"), Some("\u{4E99}"), Some("\u{4E98}"), Some("\u{9C10}"), Some("\u{8A6B}"), Some("\u{85C1}"), Some("\u{8568}"), Some("\u{6900}"),
            Some("\u{6E7E}"), Some("\u{7897}"), Some("\u{8155}"), Some("\u{20B9F}"), Some("\u{5B41}"), Some("\u{5B56}"), Some("\u{5B7D}"), Some("\u{5B93}"),
            Some("\u{5BD8}"), Some("\u{5BEC}"), Some("\u{5C12}"), Some("\u{5C1E}"), Some("\u{5C23}"), Some("\u{5C2B}"), Some("\u{378D}"), Some("\u{5C62}"),
            Some("\u{FA3B}"), Some("\u{FA3C}"), Some("\u{216B4}"), Some("\u{5C7A}"), Some("\u{5C8F}"), Some("\u{5C9F}"), Some("\u{5CA3}"), Some("\u{5CAA}"),
            Some("\u{5CBA}"), Some("\u{5CCB}"), Some("\u{5CD0}"), Some("\u{5CD2}"), Some("\u{5CF4}"), Some("\u{21E34}"), Some("\u{37E2}"), Some("\u{5D0D}"),
            Some("\u{5D27}"), Some("\u{FA11}"), Some("\u{5D46}"), Some("\u{5D47}"), Some("\u{5D53}"), Some("\u{5D4A}"), Some("\u{5D6D}"), Some("\u{5D81}"),
            Some("\u{5DA0}"), Some("\u{5DA4}"), Some("\u{5DA7}"), Some("\u{5DB8}"), Some("\u{5DCB}"), Some("\u{541E}"),
        ],
        // 1-48
        [
            Some("\u{5F0C}"), Some("\u{4E10}"), Some("\u{4E15}"), Some("\u{4E2A}"), Some("\u{4E31}"), Some("\u{4E36}"), Some("\u{4E3C}"), Some("\u{4E3F}"),
            Some("\u{4E42}"), Some("\u{4E56}"), Some("\u{4E58}"), Some("\u{4E82}"), Some("\u{4E85}"), Some("\u{8C6B}"), Some("\u{4E8A}"), Some("\u{8212}"),
            Some("\u{5F0D}"), Some("\u{4E8E}"), Some("\u{4E9E}"), Some("\u{4E9F}"), Some("\u{4EA0}"), Some("\u{4EA2}"), Some("\u{4EB0}"), Some("\u{4EB3}"),
            Some("\u{4EB6}"), Some("\u{4ECE}"), Some("\u{4ECD}"), Some("\u{4EC4}"), Some("\u{4EC6}"), Some("\u{4EC2}"), Some("\u{4ED7}"), Some("\u{4EDE}"),
            Some("\u{4EED}"), Some("\u{4EDF}"), Some("\u{4EF7}"), Some("\u{4F09}"), Some("\u{4F5A}"), Some("\u{4F30}"), Some("\u{4F5B}"), Some("\u{4F5D}"),
            Some("\u{4F57}"), Some("\u{4F47}"), Some("\u{4F76}"), Some("\u{4F88}"), Some("\u{4F8F}"), Some("\u{4F98}"), Some("\u{4F7B}"), Some("\u{4F69}"),
            Some("\u{4F70}"), Some("\u{4F91}"), Some("\u{4F6F}"), Some("\u{4F86}"), Some("\u{4F96}"), Some("\u{5118}"), Some("\u{4FD4}"), Some("\u{4FDF}"),
            Some("\u{4FCE}"), Some("\u{4FD8}"), Some("\u{4FDB}"), Some("\u{4FD1}"), Some("\u{4FDA}"), Some("\u{4FD0}"), Some("\u{4FE4}"), Some("\u{4FE5}"),
            Some("\u{501A}"), Some("\u{5028}"), Some("\u{5014}"), Some("\u{502A}"), Some("\u{5025}"), Some("\u{5005}"), Some("\u{4F1C}"), Some("\u{4FF6}"),
            Some("\u{5021}"), Some("\u{5029}"), Some("\u{502C}"), Some("\u{4FFE}"), Some("\u{4FEF}"), Some("\u{5011}"), Some("\u{5006}"), Some("\u{5043}"),
            Some("\u{5047}"), Some("\u{6703}"), Some("\u{5055}"), Some("\u{5050}"), Some("\u{5048}"), Some("\u{505A}"), Some("\u{5056}"), Some("\u{506C}"),
            Some("\u{5078}"), Some("\u{5080}"), Some("\u{509A}"), Some("\u{5085}"), Some("\u{50B4}"), Some("\u{50B2}"),
        ],
        // 1-49
        [
            Some("\u{50C9}"), Some("\u{50CA}"), Some("\u{50B3}"), Some("\u{50C2}"), Some("\u{50D6}"), Some("\u{50DE}"), Some("\u{50E5}"), Some("\u{50ED}"),
            Some("\u{50E3}"), Some("\u{50EE}"), Some("\u{50F9}"), Some("\u{50F5}"), Some("\u{5109}"), Some("\u{5101}"), Some("\u{5102}"), Some("\u{5116}"),
            Some("\u{5115}"), Some("\u{5114}"), Some("\u{511A}"), Some("\u{5121}"), Some("\u{513A}"), Some("\u{5137}"), Some("\u{513C}"), Some("\u{513B}"),
            Some("\u{513F}"), Some("\u{5140}"), Some("\u{5152}"), Some("\u{514C}"), Some("\u{5154}"), Some("\u{5162}"), Some("\u{7AF8}"), Some("\u{5169}"),
            Some("\u{516A}"), Some("\u{516E}"), Some("\u{5180}"), Some("\u{5182}"), Some("\u{56D8}"), Some("\u{518C}"), Some("\u{5189}"), Some("\u{518F}"),
            Some("\u{5191}"), Some("\u{5193}"), Some("\u{5195}"), Some("\u{5196}"), Some("\u{51A4}"), Some("\u{51A6}"), Some("\u{51A2}"), Some("\u{51A9}"),
            Some("\u{51AA}"), Some("\u{51AB}"), Some("\u{51B3}"), Some("\u{51B1}"), Some("\u{51B2}"), Some("\u{51B0}"), Some("\u{51B5}"), Some("\u{51BD}"),
            Some("\u{51C5}"), Some("\u{51C9}"), Some("\u{51DB}"), Some("\u{51E0}"), Some("\u{8655}"), Some("\u{51E9}"), Some("\u{51ED}"), Some("\u{51F0}"),
            Some("\u{51F5}"), Some("\u{51FE}"), Some("\u{5204}"), Some("\u{520B}"), Some("\u{5214}"), Some("\u{520E}"), Some("\u{5227}"), Some("\u{522A}"),
            Some("\u{522E}"), Some("\u{5233}"), Some("\u{5239}"), Some("\u{524F}"), Some("\u{5244}"), Some("\u{524B}"), Some("\u{524C}"), Some("\u{525E}"),
            Some("\u{5254}"), Some("\u{526A}"), Some("\u{5274}"), Some("\u{5269}"), Some("\u{5273}"), Some("\u{527F}"), Some("\u{527D}"), Some("\u{528D}"),
            Some("\u{5294}"), Some("\u{5292}"), Some("\u{5271}"), Some("\u{5288}"), Some("\u{5291}"), Some("\u{8FA8}"),
        ],
        // 1-50
        [
            Some("\u{8FA7}"), Some("\u{52AC}"), Some("\u{52AD}"), Some("\u{52BC}"), Some("\u{52B5}"), Some("\u{52C1}"), Some("\u{52CD}"), Some("\u{52D7}"),
            Some("\u{52DE}"), Some("\u{52E3}"), Some("\u{52E6}"), Some("\u{98ED}"), Some("\u{52E0}"), Some("\u{52F3}"), Some("\u{52F5}"), Some("\u{52F8}"),
            Some("\u{52F9}"), Some("\u{5306}"), Some("\u{5308}"), Some("\u{7538}"), Some("\u{530D}"), Some("\u{5310}"), Some("\u{530F}"), Some("\u{5315}"),
            Some("\u{531A}"), Some("\u{5323}"), Some("\u{532F}"), Some("\u{5331}"), Some("\u{5333}"), Some("\u{5338}"), Some("\u{5340}"), Some("\u{5346}"),
            Some("\u{5345}"), Some("\u{4E17}"), Some("\u{5349}"), Some("\u{534D}"), Some("\u{51D6}"), Some("\u{535E}"), Some("\u{5369}"), Some("\u{536E}"),
            Some("\u{5918}"), Some("\u{537B}"), Some("\u{5377}"), Some("\u{5382}"), Some("\u{5396}"), Some("\u{53A0}"), Some("\u{53A6}"), Some("\u{53A5}"),
            Some("\u{53AE}"), Some("\u{53B0}"), Some("\u{53B6}"), Some("\u{53C3}"), Some("\u{7C12}"), Some("\u{96D9}"), Some("\u{53DF}"), Some("\u{66FC}"),
            Some("\u{71EE}"), Some("\u{53EE}"), Some("\u{53E8}"), Some("\u{53ED}"), Some("\u{53FA}"), Some("\u{5401}"), Some("\u{543D}"), Some("\u{5440}"),
            Some("\u{542C}"), Some("\u{542D}"), Some("\u{543C}"), Some("\u{542E}"), Some("\u{5436}"), Some("\u{5429}"), Some("\u{541D}"), Some("\u{544E}"),
            Some("\u{548F}"), Some("\u{5475}"), Some("\u{548E}"), Some("\u{545F}"), Some("\u{5471}"), Some("\u{5477}"), Some("\u{5470}"), Some("\u{5492}"),
            Some("\u{547B}"), Some("\u{5480}"), Some("\u{5476}"), Some("\u{5484}"), Some("\u{5490}"), Some("\u{5486}"), Some("\u{54C7}"), Some("\u{54A2}"),
            Some("\u{54B8}"), Some("\u{54A5}"), Some("\u{54AC}"), Some("\u{54C4}"), Some("\u{54C8}"), Some("\u{54A8}"),
        ],
        // 1-51
        [
            Some("\u{54AB}"), Some("\u{54C2}"), Some("\u{54A4}"), Some("\u{54BE}"), Some("\u{54BC}"), Some("\u{54D8}"), Some("\u{54E5}"), Some("\u{54E6}"),
            Some("\u{550F}"), Some("\u{5514}"), Some("\u{54FD}"), Some("\u{54EE}"), Some("\u{54ED}"), Some("\u{54FA}"), Some("\u{54E2}"), Some("\u{5539}"),
            Some("\u{5540}"), Some("\u{5563}"), Some("\u{554C}"), Some("\u{552E}"), Some("\u{555C}"), Some("\u{5545}"), Some("\u{5556}"), Some("\u{5557}"),
            Some("\u{5538}"), Some("\u{5533}"), Some("\u{555D}"), Some("\u{5599}"), Some("\u{5580}"), Some("\u{54AF}"), Some("\u{558A}"), Some("\u{559F}"),
            Some("\u{557B}"), Some("\u{557E}"), Some("\u{5598}"), Some("\u{559E}"), Some("\u{55AE}"), Some("\u{557C}"), Some("\u{5583}"), Some("\u{55A9}"),
            Some("\u{5587}"), Some("\u{55A8}"), Some("\u{55DA}"), Some("\u{55C5}"), Some("\u{55DF}"), Some("\u{55C4}"), Some("\u{55DC}"), Some("\u{55E4}"),
            Some("\u{55D4}"), Some("\u{5614}"), Some("\u{55F7}"), Some("\u{5616}"), Some("\u{55FE}"), Some("\u{55FD}"), Some("\u{561B}"), Some("\u{55F9}"),
            Some("\u{564E}"), Some("\u{5650}"), Some("\u{71DF}"), Some("\u{5634}"), Some("\u{5636}"), Some("\u{5632}"), Some("\u{5638}"), Some("\u{566B}"),
            Some("\u{5664}"), Some("\u{562F}"), Some("\u{566C}"), Some("\u{566A}"), Some("\u{5686}"), Some("\u{5680}"), Some("\u{568A}"), Some("\u{56A0}"),
            Some("\u{5694}"), Some("\u{568F}"), Some("\u{56A5}"), Some("\u{56AE}"), Some("\u{56B6}"), Some("\u{56B4}"), Some("\u{56C2}"), Some("\u{56BC}"),
            Some("\u{56C1}"), Some("\u{56C3}"), Some("\u{56C0}"), Some("\u{56C8}"), Some("\u{56CE}"), Some("\u{56D1}"), Some("\u{56D3}"), Some("\u{56D7}"),
            Some("\u{56EE}"), Some("\u{56F9}"), Some("\u{5700}"), Some("\u{56FF}"), Some("\u{5704}"), Some("\u{5709}"),
        ],
        // 1-52
        [
            Some("\u{5708}"), Some("\u{570B}"), Some("\u{570D}"), Some("\u{5713}"), Some("\u{5718}"), Some("\u{5716}"), Some("\u{55C7}"), Some("\u{571C}"),
            Some("\u{5726}"), Some("\u{5737}"), Some("\u{5738}"), Some("\u{574E}"), Some("\u{573B}"), Some("\u{5740}"), Some("\u{574F}"), Some("\u{5769}"),
            Some("\u{57C0}"), Some("\u{5788}"), Some("\u{5761}"), Some("\u{577F}"), Some("\u{5789}"), Some("\u{5793}"), Some("\u{57A0}"), Some("\u{57B3}"),
            Some("\u{57A4}"), Some("\u{57AA}"), Some("\u{57B0}"), Some("\u{57C3}"), Some("\u{57C6}"), Some("\u{57D4}"), Some("\u{57D2}"), Some("\u{57D3}"),
            Some("\u{580A}"), Some("\u{57D6}"), Some("\u{57E3}"), Some("\u{580B}"), Some("\u{5819}"), Some("\u{581D}"), Some("\u{5872}"), Some("\u{5821}"),
            Some("\u{5862}"), Some("\u{584B}"), Some("\u{5870}"), Some("\u{6BC0}"), Some("\u{5852}"), Some("\u{583D}"), Some("\u{5879}"), Some("\u{5885}"),
            Some("\u{58B9}"), Some("\u{589F}"), Some("\u{58AB}"), Some("\u{58BA}"), Some("\u{58DE}"), Some("\u{58BB}"), Some("\u{58B8}"), Some("\u{58AE}"),
            Some("\u{58C5}"), Some("\u{58D3}"), Some("\u{58D1}"), Some("\u{58D7}"), Some("\u{58D9}"), Some("\u{58D8}"), Some("\u{58E5}"), Some("\u{58DC}"),
            Some("\u{58E4}"), Some("\u{58DF}"), Some("\u{58EF}"), Some("\u{58FA}"), Some("\u{58F9}"), Some("\u{58FB}"), Some("\u{58FC}"), Some("\u{58FD}"),
            Some("\u{5902}"), Some("\u{590A}"), Some("\u{5910}"), Some("\u{591B}"), Some("\u{68A6}"), Some("\u{5925}"), Some("\u{592C}"), Some("\u{592D}"),
            Some("\u{5932}"), Some("\u{5938}"), Some("\u{593E}"), Some("\u{7AD2}"), Some("\u{5955}"), Some("\u{5950}"), Some("\u{594E}"), Some("\u{595A}"),
            Some("\u{5958}"), Some("\u{5962}"), Some("\u{5960}"), Some("\u{5967}"), Some("\u{596C}"), Some("\u{5969}"),
        ],
        // 1-53
        [
            Some("\u{5978}"), Some("\u{5981}"), Some("\u{599D}"), Some("\u{4F5E}"), Some("\u{4FAB}"), Some("\u{59A3}"), Some("\u{59B2}"), Some("\u{59C6}"),
            Some("\u{59E8}"), Some("\u{59DC}"), Some("\u{598D}"), Some("\u{59D9}"), Some("\u{59DA}"), Some("\u{5A25}"), Some("\u{5A1F}"), Some("\u{5A11}"),
            Some("\u{5A1C}"), Some("\u{5A09}"), Some("\u{5A1A}"), Some("\u{5A40}"), Some("\u{5A6C}"), Some("\u{5A49}"), Some("\u{5A35}"), Some("\u{5A36}"),
            Some("\u{5A62}"), Some("\u{5A6A}"), Some("\u{5A9A}"), Some("\u{5ABC}"), Some("\u{5ABE}"), Some("\u{5ACB}"), Some("\u{5AC2}"), Some("\u{5ABD}"),
            Some("\u{5AE3}"), Some("\u{5AD7}"), Some("\u{5AE6}"), Some("\u{5AE9}"), Some("\u{5AD6}"), Some("\u{5AFA}"), Some("\u{5AFB}"), Some("\u{5B0C}"),
            Some("\u{5B0B}"), Some("\u{5B16}"), Some("\u{5B32}"), Some("\u{5AD0}"), Some("\u{5B2A}"), Some("\u{5B36}"), Some("\u{5B3E}"), Some("\u{5B43}"),
            Some("\u{5B45}"), Some("\u{5B40}"), Some("\u{5B51}"), Some("\u{5B55}"), Some("\u{5B5A}"), Some("\u{5B5B}"), Some("\u{5B65}"), Some("\u{5B69}"),
            Some("\u{5B70}"), Some("\u{5B73}"), Some("\u{5B75}"), Some("\u{5B78}"), Some("\u{6588}"), Some("\u{5B7A}"), Some("\u{5B80}"), Some("\u{5B83}"),
            Some("\u{5BA6}"), Some("\u{5BB8}"), Some("\u{5BC3}"), Some("\u{5BC7}"), Some("\u{5BC9}"), Some("\u{5BD4}"), Some("\u{5BD0}"), Some("\u{5BE4}"),
            Some("\u{5BE6}"), Some("\u{5BE2}"), Some("\u{5BDE}"), Some("\u{5BE5}"), Some("\u{5BEB}"), Some("\u{5BF0}"), Some("\u{5BF6}"), Some("\u{5BF3}"),
            Some("\u{5C05}"), Some("\u{5C07}"), Some("\u{5C08}"), Some("\u{5C0D}"), Some("\u{5C13}"), Some("\u{5C20}"), Some("\u{5C22}"), Some("\u{5C28}"),
            Some("\u{5C38}"), Some("\u{5C39}"), Some("\u{5C41}"), Some("\u{5C46}"), Some("\u{5C4E}"), Some("\u{5C53}"),
        ],
        // 1-54
        [
            Some("\u{5C50}"), Some("\u{5C4F}"), Some("\u{5B71}"), Some("\u{5C6C}"), Some("\u{5C6E}"), Some("\u{4E62}"), Some("\u{5C76}"), Some("\u{5C79}"),
            Some("\u{5C8C}"), Some("\u{5C91}"), Some("\u{5C94}"), Some("\u{599B}"), Some("\u{5CAB}"), Some("\u{5CBB}"), Some("\u{5CB6}"), Some("\u{5CBC}"),
            Some("\u{5CB7}"), Some("\u{5CC5}"), Some("\u{5CBE}"), Some("\u{5CC7}"), Some("\u{5CD9}"), Some("\u{5CE9}"), Some("\u{5CFD}"), Some("\u{5CFA}"),
            Some("\u{5CED}"), Some("\u{5D8C}"), Some("\u{5CEA}"), Some("\u{5D0B}"), Some("\u{5D15}"), Some("\u{5D17}"), Some("\u{5D5C}"), Some("\u{5D1F}"),
            Some("\u{5D1B}"), Some("\u{5D11}"), Some("\u{5D14}"), Some("\u{5D22}"), Some("\u{5D1A}"), Some("\u{5D19}"), Some("\u{5D18}"), Some("\u{5D4C}"),
            Some("\u{5D52}"), Some("\u{5D4E}"), Some("\u{5D4B}"), Some("\u{5D6C}"), Some("\u{5D73}"), Some("\u{5D76}"), Some("\u{5D87}"), Some("\u{5D84}"),
            Some("\u{5D82}"), Some("\u{5DA2}"), Some("\u{5D9D}"), Some("\u{5DAC}"), Some("\u{5DAE}"), Some("\u{5DBD}"), Some("\u{5D90}"), Some("\u{5DB7}"),
            Some("\u{5DBC}"), Some("\u{5DC9}"), Some("\u{5DCD}"), Some("\u{5DD3}"), Some("\u{5DD2}"), Some("\u{5DD6}"), Some("\u{5DDB}"), Some("\u{5DEB}"),
            Some("\u{5DF2}"), Some("\u{5DF5}"), Some("\u{5E0B}"), Some("\u{5E1A}"), Some("\u{5E19}"), Some("\u{5E11}"), Some("\u{5E1B}"), Some("\u{5E36}"),
            Some("\u{5E37}"), Some("\u{5E44}"), Some("\u{5E43}"), Some("\u{5E40}"), Some("\u{5E4E}"), Some("\u{5E57}"), Some("\u{5E54}"), Some("\u{5E5F}"),
            Some("\u{5E62}"), Some("\u{5E64}"), Some("\u{5E47}"), Some("\u{5E75}"), Some("\u{5E76}"), Some("\u{5E7A}"), Some("\u{9EBC}"), Some("\u{5E7F}"),
            Some("\u{5EA0}"), Some("\u{5EC1}"), Some("\u{5EC2}"), Some("\u{5EC8}"), Some("\u{5ED0}"), Some("\u{5ECF}"),
        ],
        // 1-55
        [
            Some("\u{5ED6}"), Some("\u{5EE3}"), Some("\u{5EDD}"), Some("\u{5EDA}"), Some("\u{5EDB}"), Some("\u{5EE2}"), Some("\u{5EE1}"), Some("\u{5EE8}"),
            Some("\u{5EE9}"), Some("\u{5EEC}"), Some("\u{5EF1}"), Some("\u{5EF3}"), Some("\u{5EF0}"), Some("\u{5EF4}"), Some("\u{5EF8}"), Some("\u{5EFE}"),
            Some("\u{5F03}"), Some("\u{5F09}"), Some("\u{5F5D}"), Some("\u{5F5C}"), Some("\u{5F0B}"), Some("\u{5F11}"), Some("\u{5F16}"), Some("\u{5F29}"),
            Some("\u{5F2D}"), Some("\u{5F38}"), Some("\u{5F41}"), Some("\u{5F48}"), Some("\u{5F4C}"), Some("\u{5F4E}"), Some("\u{5F2F}"), Some("\u{5F51}"),
            Some("\u{5F56}"), Some("\u{5F57}"), Some("\u{5F59}"), Some("\u{5F61}"), Some("\u{5F6D}"), Some("\u{5F73}"), Some("\u{5F77}"), Some("\u{5F83}"),
            Some("\u{5F82}"), Some("\u{5F7F}"), Some("\u{5F8A}"), Some("\u{5F88}"), Some("\u{5F91}"), Some("\u{5F87}"), Some("\u{5F9E}"), Some("\u{5F99}"),
            Some("\u{5F98}"), Some("\u{5FA0}"), Some("\u{5FA8}"), Some("\u{5FAD}"), Some("\u{5FBC}"), Some("\u{5FD6}"), Some("\u{5FFB}"), Some("\u{5FE4}"),
            Some("\u{5FF8}"), Some("\u{5FF1}"), Some("\u{5FDD}"), Some("\u{60B3}"), Some("\u{5FFF}"), Some("\u{6021}"), Some("\u{6060}"), Some("\u{6019}"),
            Some("\u{6010}"), Some("\u{6029}"), Some("\u{600E}"), Some("\u{6031}"), Some("\u{601B}"), Some("\u{6015}"), Some("\u{602B}"), Some("\u{6026}"),
            Some("\u{600F}"), Some("\u{603A}"), Some("\u{605A}"), Some("\u{6041}"), Some("\u{606A}"), Some("\u{6077}"), Some("\u{605F}"), Some("\u{604A}"),
            Some("\u{6046}"), Some("\u{604D}"), Some("\u{6063}"), Some("\u{6043}"), Some("\u{6064}"), Some("\u{6042}"), Some("\u{606C}"), Some("\u{606B}"),
            Some("\u{6059}"), Some("\u{6081}"), Some("\u{608D}"), Some("\u{60E7}"), Some("\u{6083}"), Some("\u{609A}"),
        ],
        // 1-56
        [
            Some("\u{6084}"), Some("\u{609B}"), Some("\u{6096}"), Some("\u{6097}"), Some("\u{6092}"), Some("\u{60A7}"), Some("\u{608B}"), Some("\u{60E1}"),
            Some("\u{60B8}"), Some("\u{60E0}"), Some("\u{60D3}"), Some("\u{60B4}"), Some("\u{5FF0}"), Some("\u{60BD}"), Some("\u{60C6}"), Some("\u{60B5}"),
            Some("\u{60D8}"), Some("\u{614D}"), Some("\u{6115}"), Some("\u{6106}"), Some("\u{60F6}"), Some("\u{60F7}"), Some("\u{6100}"), Some("\u{60F4}"),
            Some("\u{60FA}"), Some("\u{6103}"), Some("\u{6121}"), Some("\u{60FB}"), Some("\u{60F1}"), Some("\u{610D}"), Some("\u{610E}"), Some("\u{6147}"),
            Some("\u{613E}"), Some("\u{6128}"), Some("\u{6127}"), Some("\u{614A}"), Some("\u{613F}"), Some("\u{613C}"), Some("\u{612C}"), Some("\u{6134}"),
            Some("\u{613D}"), Some("\u{6142}"), Some("\u{6144}"), Some("\u{6173}"), Some("\u{6177}"), Some("\u{6158}"), Some("\u{6159}"), Some("\u{615A}"),
            Some("\u{616B}"), Some("\u{6174}"), Some("\u{616F}"), Some("\u{6165}"), Some("\u{6171}"), Some("\u{615F}"), Some("\u{615D}"), Some("\u{6153}"),
            Some("\u{6175}"), Some("\u{6199}"), Some("\u{6196}"), Some("\u{6187}"), Some("\u{61AC}"), Some("\u{6194}"), Some("\u{619A}"), Some("\u{618A}"),
            Some("\u{6191}"), Some("\u{61AB}"), Some("\u{61AE}"), Some("\u{61CC}"), Some("\u{61CA}"), Some("\u{61C9}"), Some("\u{61F7}"), Some("\u{61C8}"),
            Some("\u{61C3}"), Some("\u{61C6}"), Some("\u{61BA}"), Some("\u{61CB}"), Some("\u{7F79}"), Some("\u{61CD}"), Some("\u{61E6}"), Some("\u{61E3}"),
            Some("\u{61F6}"), Some("\u{61FA}"), Some("\u{61F4}"), Some("\u{61FF}"), Some("\u{61FD}"), Some("\u{61FC}"), Some("\u{61FE}"), Some("\u{6200}"),
            Some("\u{6208}"), Some("\u{6209}"), Some("\u{620D}"), Some("\u{620C}"), Some("\u{6214}"), Some("\u{621B}"),
        ],
        // 1-57
        [
            Some("\u{621E}"), Some("\u{6221}"), Some("\u{622A}"), Some("\u{622E}"), Some("\u{6230}"), Some("\u{6232}"), Some("\u{6233}"), Some("\u{6241}"),
            Some("\u{624E}"), Some("\u{625E}"), Some("\u{6263}"), Some("\u{625B}"), Some("\u{6260}"), Some("\u{6268}"), Some("\u{627C}"), Some("\u{6282}"),
            Some("\u{6289}"), Some("\u{627E}"), Some("\u{6292}"), Some("\u{6293}"), Some("\u{6296}"), Some("\u{62D4}"), Some("\u{6283}"), Some("\u{6294}"),
            Some("\u{62D7}"), Some("\u{62D1}"), Some("\u{62BB}"), Some("\u{62CF}"), Some("\u{62FF}"), Some("\u{62C6}"), Some("\u{64D4}"), Some("\u{62C8}"),
            Some("\u{62DC}"), Some("\u{62CC}"), Some("\u{62CA}"), Some("\u{62C2}"), Some("\u{62C7}"), Some("\u{629B}"), Some("\u{62C9}"), Some("\u{630C}"),
            Some("\u{62EE}"), Some("\u{62F1}"), Some("\u{6327}"), Some("\u{6302}"), Some("\u{6308}"), Some("\u{62EF}"), Some("\u{62F5}"), Some("\u{6350}"),
            Some("\u{633E}"), Some("\u{634D}"), Some("\u{641C}"), Some("\u{634F}"), Some("\u{6396}"), Some("\u{638E}"), Some("\u{6380}"), Some("\u{63AB}"),
            Some("\u{6376}"), Some("\u{63A3}"), Some("\u{638F}"), Some("\u{6389}"), Some("\u{639F}"), Some("\u{63B5}"), Some("\u{636B}"), Some("\u{6369}"),
            Some("\u{63BE}"), Some("\u{63E9}"), Some("\u{63C0}"), Some("\u{63C6}"), Some("\u{63E3}"), Some("\u{63C9}"), Some("\u{63D2}"), Some("\u{63F6}"),
            Some("\u{63C4}"), Some("\u{6416}"), Some("\u{6434}"), Some("\u{6406}"), Some("\u{6413}"), Some("\u{6426}"), Some("\u{6436}"), Some("\u{651D}"),
            Some("\u{6417}"), Some("\u{6428}"), Some("\u{640F}"), Some("\u{6467}"), Some("\u{646F}"), Some("\u{6476}"), Some("\u{644E}"), Some("\u{652A}"),
            Some("\u{6495}"), Some("\u{6493}"), Some("\u{64A5}"), Some("\u{64A9}"), Some("\u{6488}"), Some("\u{64BC}"),
        ],
        // 1-58
        [
            Some("\u{64DA}"), Some("\u{64D2}"), Some("\u{64C5}"), Some("\u{64C7}"), Some("\u{64BB}"), Some("\u{64D8}"), Some("\u{64C2}"), Some("\u{64F1}"),
            Some("\u{64E7}"), Some("\u{8209}"), Some("\u{64E0}"), Some("\u{64E1}"), Some("\u{62AC}"), Some("\u{64E3}"), Some("\u{64EF}"), Some("\u{652C}"),
            Some("\u{64F6}"), Some("\u{64F4}"), Some("\u{64F2}"), Some("\u{64FA}"), Some("\u{6500}"), Some("\u{64FD}"), Some("\u{6518}"), Some("\u{651C}"),
            Some("\u{6505}"), Some("\u{6524}"), Some("\u{6523}"), Some("\u{652B}"), Some("\u{6534}"), Some("\u{6535}"), Some("\u{6537}"), Some("\u{6536}"),
            Some("\u{6538}"), Some("\u{754B}"), Some("\u{6548}"), Some("\u{6556}"), Some("\u{6555}"), Some("\u{654D}"), Some("\u{6558}"), Some("\u{655E}"),
            Some("\u{655D}"), Some("\u{6572}"), Some("\u{6578}"), Some("\u{6582}"), Some("\u{6583}"), Some("\u{8B8A}"), Some("\u{659B}"), Some("\u{659F}"),
            Some("\u{65AB}"), Some("\u{65B7}"), Some("\u{65C3}"), Some("\u{65C6}"), Some("\u{65C1}"), Some("\u{65C4}"), Some("\u{65CC}"), Some("\u{65D2}"),
            Some("\u{65DB}"), Some("\u{65D9}"), Some("\u{65E0}"), Some("\u{65E1}"), Some("\u{65F1}"), Some("\u{6772}"), Some("\u{660A}"), Some("\u{6603}"),
            Some("\u{65FB}"), Some("\u{6773}"), Some("\u{6635}"), Some("\u{6636}"), Some("\u{6634}"), Some("\u{661C}"), Some("\u{664F}"), Some("\u{6644}"),
            Some("\u{6649}"), Some("\u{6641}"), Some("\u{665E}"), Some("\u{665D}"), Some("\u{6664}"), Some("\u{6667}"), Some("\u{6668}"), Some("\u{665F}"),
            Some("\u{6662}"), Some("\u{6670}"), Some("\u{6683}"), Some("\u{6688}"), Some("\u{668E}"), Some("\u{6689}"), Some("\u{6684}"), Some("\u{6698}"),
            Some("\u{669D}"), Some("\u{66C1}"), Some("\u{66B9}"), Some("\u{66C9}"), Some("\u{66BE}"), Some("\u{66BC}"),
        ],
        // 1-59
        [
            Some("\u{66C4}"), Some("\u{66B8}"), Some("\u{66D6}"), Some("\u{66DA}"), Some("\u{66E0}"), Some("\u{663F}"), Some("\u{66E6}"), Some("\u{66E9}"),
            Some("\u{66F0}"), Some("\u{66F5}"), Some("\u{66F7}"), Some("\u{670F}"), Some("\u{6716}"), Some("\u{671E}"), Some("\u{6726}"), Some("\u{6727}"),
            Some("\u{9738}"), Some("\u{672E}"), Some("\u{673F}"), Some("\u{6736}"), Some("\u{6741}"), Some("\u{6738}"), Some("\u{6737}"), Some("\u{6746}"),
            Some("\u{675E}"), Some("\u{6760}"), Some("\u{6759}"), Some("\u{6763}"), Some("\u{6764}"), Some("\u{6789}"), Some("\u{6770}"), Some("\u{67A9}"),
            Some("\u{677C}"), Some("\u{676A}"), Some("\u{678C}"), Some("\u{678B}"), Some("\u{67A6}"), Some("\u{67A1}"), Some("\u{6785}"), Some("\u{67B7}"),
            Some("\u{67EF}"), Some("\u{67B4}"), Some("\u{67EC}"), Some("\u{67B3}"), Some("\u{67E9}"), Some("\u{67B8}"), Some("\u{67E4}"), Some("\u{67DE}"),
            Some("\u{67DD}"), Some("\u{67E2}"), Some("\u{67EE}"), Some("\u{67B9}"), Some("\u{67CE}"), Some("\u{67C6}"), Some("\u{67E7}"), Some("\u{6A9C}"),
            Some("\u{681E}"), Some("\u{6846}"), Some("\u{6829}"), Some("\u{6840}"), Some("\u{684D}"), Some("\u{6832}"), Some("\u{684E}"), Some("\u{68B3}"),
            Some("\u{682B}"), Some("\u{6859}"), Some("\u{6863}"), Some("\u{6877}"), Some("\u{687F}"), Some("\u{689F}"), Some("\u{688F}"), Some("\u{68AD}"),
            Some("\u{6894}"), Some("\u{689D}"), Some("\u{689B}"), Some("\u{6883}"), Some("\u{6AAE}"), Some("\u{68B9}"), Some("\u{6874}"), Some("\u{68B5}"),
            Some("\u{68A0}"), Some("\u{68BA}"), Some("\u{690F}"), Some("\u{688D}"), Some("\u{687E}"), Some("\u{6901}"), Some("\u{68CA}"), Some("\u{6908}"),
            Some("\u{68D8}"), Some("\u{6922}"), Some("\u{6926}"), Some("\u{68E1}"), Some("\u{690C}"), Some("\u{68CD}"),
        ],
        // 1-60
        [
            Some("\u{68D4}"), Some("\u{68E7}"), Some("\u{68D5}"), Some("\u{6936}"), Some("\u{6912}"), Some("\u{6904}"), Some("\u{68D7}"), Some("\u{68E3}"),
            Some("\u{6925}"), Some("\u{68F9}"), Some("\u{68E0}"), Some("\u{68EF}"), Some("\u{6928}"), Some("\u{692A}"), Some("\u{691A}"), Some("\u{6923}"),
            Some("\u{6921}"), Some("\u{68C6}"), Some("\u{6979}"), Some("\u{6977}"), Some("\u{695C}"), Some("\u{6978}"), Some("\u{696B}"), Some("\u{6954}"),
            Some("\u{697E}"), Some("\u{696E}"), Some("\u{6939}"), Some("\u{6974}"), Some("\u{693D}"), Some("\u{6959}"), Some("\u{6930}"), Some("\u{6961}"),
            Some("\u{695E}"), Some("\u{695D}"), Some("\u{6981}"), Some("\u{696A}"), Some("\u{69B2}"), Some("\u{69AE}"), Some("\u{69D0}"), Some("\u{69BF}"),
            Some("\u{69C1}"), Some("\u{69D3}"), Some("\u{69BE}"), Some("\u{69CE}"), Some("\u{5BE8}"), Some("\u{69CA}"), Some("\u{69DD}"), Some("\u{69BB}"),
            Some("\u{69C3}"), Some("\u{69A7}"), Some("\u{6A2E}"), Some("\u{6991}"), Some("\u{69A0}"), Some("\u{699C}"), Some("\u{6995}"), Some("\u{69B4}"),
            Some("\u{69DE}"), Some("\u{69E8}"), Some("\u{6A02}"), Some("\u{6A1B}"), Some("\u{69FF}"), Some("\u{6B0A}"), Some("\u{69F9}"), Some("\u{69F2}"),
            Some("\u{69E7}"), Some("\u{6A05}"), Some("\u{69B1}"), Some("\u{6A1E}"), Some("\u{69ED}"), Some("\u{6A14}"), Some("\u{69EB}"), Some("\u{6A0A}"),
            Some("\u{6A12}"), Some("\u{6AC1}"), Some("\u{6A23}"), Some("\u{6A13}"), Some("\u{6A44}"), Some("\u{6A0C}"), Some("\u{6A72}"), Some("\u{6A36}"),
            Some("\u{6A78}"), Some("\u{6A47}"), Some("\u{6A62}"), Some("\u{6A59}"), Some("\u{6A66}"), Some("\u{6A48}"), Some("\u{6A38}"), Some("\u{6A22}"),
            Some("\u{6A90}"), Some("\u{6A8D}"), Some("\u{6AA0}"), Some("\u{6A84}"), Some("\u{6AA2}"), Some("\u{6AA3}"),
        ],
        // 1-61
        [
            Some("\u{6A97}"), Some("\u{8617}"), Some("\u{6ABB}"), Some("\u{6AC3}"), Some("\u{6AC2}"), Some("\u{6AB8}"), Some("\u{6AB3}"), Some("\u{6AAC}"),
            Some("\u{6ADE}"), Some("\u{6AD1}"), Some("\u{6ADF}"), Some("\u{6AAA}"), Some("\u{6ADA}"), Some("\u{6AEA}"), Some("\u{6AFB}"), Some("\u{6B05}"),
            Some("\u{8616}"), Some("\u{6AFA}"), Some("\u{6B12}"), Some("\u{6B16}"), Some("\u{9B31}"), Some("\u{6B1F}"), Some("\u{6B38}"), Some("\u{6B37}"),
            Some("\u{76DC}"), Some("\u{6B39}"), Some("\u{98EE}"), Some("\u{6B47}"), Some("\u{6B43}"), Some("\u{6B49}"), Some("\u{6B50}"), Some("\u{6B59}"),
            Some("\u{6B54}"), Some("\u{6B5B}"), Some("\u{6B5F}"), Some("\u{6B61}"), Some("\u{6B78}"), Some("\u{6B79}"), Some("\u{6B7F}"), Some("\u{6B80}"),
            Some("\u{6B84}"), Some("\u{6B83}"), Some("\u{6B8D}"), Some("\u{6B98}"), Some("\u{6B95}"), Some("\u{6B9E}"), Some("\u{6BA4}"), Some("\u{6BAA}"),
            Some("\u{6BAB}"), Some("\u{6BAF}"), Some("\u{6BB2}"), Some("\u{6BB1}"), Some("\u{6BB3}"), Some("\u{6BB7}"), Some("\u{6BBC}"), Some("\u{6BC6}"),
            Some("\u{6BCB}"), Some("\u{6BD3}"), Some("\u{6BDF}"), Some("\u{6BEC}"), Some("\u{6BEB}"), Some("\u{6BF3}"), Some("\u{6BEF}"), Some("\u{9EBE}"),
            Some("\u{6C08}"), Some("\u{6C13}"), Some("\u{6C14}"), Some("\u{6C1B}"), Some("\u{6C24}"), Some("\u{6C23}"), Some("\u{6C5E}"), Some("\u{6C55}"),
            Some("\u{6C62}"), Some("\u{6C6A}"), Some("\u{6C82}"), Some("\u{6C8D}"), Some("\u{6C9A}"), Some("\u{6C81}"), Some("\u{6C9B}"), Some("\u{6C7E}"),
            Some("\u{6C68}"), Some("\u{6C73}"), Some("\u{6C92}"), Some("\u{6C90}"), Some("\u{6CC4}"), Some("\u{6CF1}"), Some("\u{6CD3}"), Some("\u{6CBD}"),
            Some("\u{6CD7}"), Some("\u{6CC5}"), Some("\u{6CDD}"), Some("\u{6CAE}"), Some("\u{6CB1}"), Some("\u{6CBE}"),
        ],
        // 1-62
        [
            Some("\u{6CBA}"), Some("\u{6CDB}"), Some("\u{6CEF}"), Some("\u{6CD9}"), Some("\u{6CEA}"), Some("\u{6D1F}"), Some("\u{884D}"), Some("\u{6D36}"),
            Some("\u{6D2B}"), Some("\u{6D3D}"), Some("\u{6D38}"), Some("\u{6D19}"), Some("\u{6D35}"), Some("\u{6D33}"), Some("\u{6D12}"), Some("\u{6D0C}"),
            Some("\u{6D63}"), Some("\u{6D93}"), Some("\u{6D64}"), Some("\u{6D5A}"), Some("\u{6D79}"), Some("\u{6D59}"), Some("\u{6D8E}"), Some("\u{6D95}"),
            Some("\u{6FE4}"), Some("\u{6D85}"), Some("\u{6DF9}"), Some("\u{6E15}"), Some("\u{6E0A}"), Some("\u{6DB5}"), Some("\u{6DC7}"), Some("\u{6DE6}"),
            Some("\u{6DB8}"), Some("\u{6DC6}"), Some("\u{6DEC}"), Some("\u{6DDE}"), Some("\u{6DCC}"), Some("\u{6DE8}"), Some("\u{6DD2}"), Some("\u{6DC5}"),
            Some("\u{6DFA}"), Some("\u{6DD9}"), Some("\u{6DE4}"), Some("\u{6DD5}"), Some("\u{6DEA}"), Some("\u{6DEE}"), Some("\u{6E2D}"), Some("\u{6E6E}"),
            Some("\u{6E2E}"), Some("\u{6E19}"), Some("\u{6E72}"), Some("\u{6E5F}"), Some("\u{6E3E}"), Some("\u{6E23}"), Some("\u{6E6B}"), Some("\u{6E2B}"),
            Some("\u{6E76}"), Some("\u{6E4D}"), Some("\u{6E1F}"), Some("\u{6E43}"), Some("\u{6E3A}"), Some("\u{6E4E}"), Some("\u{6E24}"), Some("\u{6EFF}"),
            Some("\u{6E1D}"), Some("\u{6E38}"), Some("\u{6E82}"), Some("\u{6EAA}"), Some("\u{6E98}"), Some("\u{6EC9}"), Some("\u{6EB7}"), Some("\u{6ED3}"),
            Some("\u{6EBD}"), Some("\u{6EAF}"), Some("\u{6EC4}"), Some("\u{6EB2}"), Some("\u{6ED4}"), Some("\u{6ED5}"), Some("\u{6E8F}"), Some("\u{6EA5}"),
            Some("\u{6EC2}"), Some("\u{6E9F}"), Some("\u{6F41}"), Some("\u{6F11}"), Some("\u{704C}"), Some("\u{6EEC}"), Some("\u{6EF8}"), Some("\u{6EFE}"),
            Some("\u{6F3F}"), Some("\u{6EF2}"), Some("\u{6F31}"), Some("\u{6EEF}"), Some("\u{6F32}"), Some("\u{6ECC}"),
        ],
        // 1-63
        [
            Some("\u{6F3E}"), Some("\u{6F13}"), Some("\u{6EF7}"), Some("\u{6F86}"), Some("\u{6F7A}"), Some("\u{6F78}"), Some("\u{6F81}"), Some("\u{6F80}"),
            Some("\u{6F6F}"), Some("\u{6F5B}"), Some("\u{6FF3}"), Some("\u{6F6D}"), Some("\u{6F82}"), Some("\u{6F7C}"), Some("\u{6F58}"), Some("\u{6F8E}"),
            Some("\u{6F91}"), Some("\u{6FC2}"), Some("\u{6F66}"), Some("\u{6FB3}"), Some("\u{6FA3}"), Some("\u{6FA1}"), Some("\u{6FA4}"), Some("\u{6FB9}"),
            Some("\u{6FC6}"), Some("\u{6FAA}"), Some("\u{6FDF}"), Some("\u{6FD5}"), Some("\u{6FEC}"), Some("\u{6FD4}"), Some("\u{6FD8}"), Some("\u{6FF1}"),
            Some("\u{6FEE}"), Some("\u{6FDB}"), Some("\u{7009}"), Some("\u{700B}"), Some("\u{6FFA}"), Some("\u{7011}"), Some("\u{7001}"), Some("\u{700F}"),
            Some("\u{6FFE}"), Some("\u{701B}"), Some("\u{701A}"), Some("\u{6F74}"), Some("\u{701D}"), Some("\u{7018}"), Some("\u{701F}"), Some("\u{7030}"),
            Some("\u{703E}"), Some("\u{7032}"), Some("\u{7051}"), Some("\u{7063}"), Some("\u{7099}"), Some("\u{7092}"), Some("\u{70AF}"), Some("\u{70F1}"),
            Some("\u{70AC}"), Some("\u{70B8}"), Some("\u{70B3}"), Some("\u{70AE}"), Some("\u{70DF}"), Some("\u{70CB}"), Some("\u{70DD}"), Some("\u{70D9}"),
            Some("\u{7109}"), Some("\u{70FD}"), Some("\u{711C}"), Some("\u{7119}"), Some("\u{7165}"), Some("\u{7155}"), Some("\u{7188}"), Some("\u{7166}"),
            Some("\u{7162}"), Some("\u{714C}"), Some("\u{7156}"), Some("\u{716C}"), Some("\u{718F}"), Some("\u{71FB}"), Some("\u{7184}"), Some("\u{7195}"),
            Some("\u{71A8}"), Some("\u{71AC}"), Some("\u{71D7}"), Some("\u{71B9}"), Some("\u{71BE}"), Some("\u{71D2}"), Some("\u{71C9}"), Some("\u{71D4}"),
            Some("\u{71CE}"), Some("\u{71E0}"), Some("\u{71EC}"), Some("\u{71E7}"), Some("\u{71F5}"), Some("\u{71FC}"),
        ],
        // 1-64
        [
            Some("\u{71F9}"), Some("\u{71FF}"), Some("\u{720D}"), Some("\u{7210}"), Some("\u{721B}"), Some("\u{7228}"), Some("\u{722D}"), Some("\u{722C}"),
            Some("\u{7230}"), Some("\u{7232}"), Some("\u{723B}"), Some("\u{723C}"), Some("\u{723F}"), Some("\u{7240}"), Some("\u{7246}"), Some("\u{724B}"),
            Some("\u{7258}"), Some("\u{7274}"), Some("\u{727E}"), Some("\u{7282}"), Some("\u{7281}"), Some("\u{7287}"), Some("\u{7292}"), Some("\u{7296}"),
            Some("\u{72A2}"), Some("\u{72A7}"), Some("\u{72B9}"), Some("\u{72B2}"), Some("\u{72C3}"), Some("\u{72C6}"), Some("\u{72C4}"), Some("\u{72CE}"),
            Some("\u{72D2}"), Some("\u{72E2}"), Some("\u{72E0}"), Some("\u{72E1}"), Some("\u{72F9}"), Some("\u{72F7}"), Some("\u{500F}"), Some("\u{7317}"),
            Some("\u{730A}"), Some("\u{731C}"), Some("\u{7316}"), Some("\u{731D}"), Some("\u{7334}"), Some("\u{732F}"), Some("\u{7329}"), Some("\u{7325}"),
            Some("\u{733E}"), Some("\u{734E}"), Some("\u{734F}"), Some("\u{9ED8}"), Some("\u{7357}"), Some("\u{736A}"), Some("\u{7368}"), Some("\u{7370}"),
            Some("\u{7378}"), Some("\u{7375}"), Some("\u{737B}"), Some("\u{737A}"), Some("\u{73C8}"), Some("\u{73B3}"), Some("\u{73CE}"), Some("\u{73BB}"),
            Some("\u{73C0}"), Some("\u{73E5}"), Some("\u{73EE}"), Some("\u{73DE}"), Some("\u{74A2}"), Some("\u{7405}"), Some("\u{746F}"), Some("\u{7425}"),
            Some("\u{73F8}"), Some("\u{7432}"), Some("\u{743A}"), Some("\u{7455}"), Some("\u{743F}"), Some("\u{745F}"), Some("\u{7459}"), Some("\u{7441}"),
            Some("\u{745C}"), Some("\u{7469}"), Some("\u{7470}"), Some("\u{7463}"), Some("\u{746A}"), Some("\u{7476}"), Some("\u{747E}"), Some("\u{748B}"),
            Some("\u{749E}"), Some("\u{74A7}"), Some("\u{74CA}"), Some("\u{74CF}"), Some("\u{74D4}"), Some("\u{73F1}"),
        ],
        // 1-65
        [
            Some("\u{74E0}"), Some("\u{74E3}"), Some("\u{74E7}"), Some("\u{74E9}"), Some("\u{74EE}"), Some("\u{74F2}"), Some("\u{74F0}"), Some("\u{74F1}"),
            Some("\u{74F8}"), Some("\u{74F7}"), Some("\u{7504}"), Some("\u{7503}"), Some("\u{7505}"), Some("\u{750C}"), Some("\u{750E}"), Some("\u{750D}"),
            Some("\u{7515}"), Some("\u{7513}"), Some("\u{751E}"), Some("\u{7526}"), Some("\u{752C}"), Some("\u{753C}"), Some("\u{7544}"), Some("\u{754D}"),
            Some("\u{754A}"), Some("\u{7549}"), Some("\u{755B}"), Some("\u{7546}"), Some("\u{755A}"), Some("\u{7569}"), Some("\u{7564}"), Some("\u{7567}"),
            Some("\u{756B}"), Some("\u{756D}"), Some("\u{7578}"), Some("\u{7576}"), Some("\u{7586}"), Some("\u{7587}"), Some("\u{7574}"), Some("\u{758A}"),
            Some("\u{7589}"), Some("\u{7582}"), Some("\u{7594}"), Some("\u{759A}"), Some("\u{759D}"), Some("\u{75A5}"), Some("\u{75A3}"), Some("\u{75C2}"),
            Some("\u{75B3}"), Some("\u{75C3}"), Some("\u{75B5}"), Some("\u{75BD}"), Some("\u{75B8}"), Some("\u{75BC}"), Some("\u{75B1}"), Some("\u{75CD}"),
            Some("\u{75CA}"), Some("\u{75D2}"), Some("\u{75D9}"), Some("\u{75E3}"), Some("\u{75DE}"), Some("\u{75FE}"), Some("\u{75FF}"), Some("\u{75FC}"),
            Some("\u{7601}"), Some("\u{75F0}"), Some("\u{75FA}"), Some("\u{75F2}"), Some("\u{75F3}"), Some("\u{760B}"), Some("\u{760D}"), Some("\u{7609}"),
            Some("\u{761F}"), Some("\u{7627}"), Some("\u{7620}"), Some("\u{7621}"), Some("\u{7622}"), Some("\u{7624}"), Some("\u{7634}"), Some("\u{7630}"),
            Some("\u{763B}"), Some("\u{7647}"), Some("\u{7648}"), Some("\u{7646}"), Some("\u{765C}"), Some("\u{7658}"), Some("\u{7661}"), Some("\u{7662}"),
            Some("\u{7668}"), Some("\u{7669}"), Some("\u{766A}"), Some("\u{7667}"), Some("\u{766C}"), Some("\u{7670}"),
        ],
        // 1-66
        [
            Some("\u{7672}"), Some("\u{7676}"), Some("\u{7678}"), Some("\u{767C}"), Some("\u{7680}"), Some("\u{7683}"), Some("\u{7688}"), Some("\u{768B}"),
            Some("\u{768E}"), Some("\u{7696}"), Some("\u{7693}"), Some("\u{7699}"), Some("\u{769A}"), Some("\u{76B0}"), Some("\u{76B4}"), Some("\u{76B8}"),
            Some("\u{76B9}"), Some("\u{76BA}"), Some("\u{76C2}"), Some("\u{76CD}"), Some("\u{76D6}"), Some("\u{76D2}"), Some("\u{76DE}"), Some("\u{76E1}"),
            Some("\u{76E5}"), Some("\u{76E7}"), Some("\u{76EA}"), Some("\u{862F}"), Some("\u{76FB}"), Some("\u{7708}"), Some("\u{7707}"), Some("\u{7704}"),
            Some("\u{7729}"), Some("\u{7724}"), Some("\u{771E}"), Some("\u{7725}"), Some("\u{7726}"), Some("\u{771B}"), Some("\u{7737}"), Some("\u{7738}"),
            Some("\u{7747}"), Some("\u{775A}"), Some("\u{7768}"), Some("\u{776B}"), Some("\u{775B}"), Some("\u{7765}"), Some("\u{777F}"), Some("\u{777E}"),
            Some("\u{7779}"), Some("\u{778E}"), Some("\u{778B}"), Some("\u{7791}"), Some("\u{77A0}"), Some("\u{779E}"), Some("\u{77B0}"), Some("\u{77B6}"),
            Some("\u{77B9}"), Some("\u{77BF}"), Some("\u{77BC}"), Some("\u{77BD}"), Some("\u{77BB}"), Some("\u{77C7}"), Some("\u{77CD}"), Some("\u{77D7}"),
            Some("\u{77DA}"), Some("\u{77DC}"), Some("\u{77E3}"), Some("\u{77EE}"), Some("\u{77FC}"), Some("\u{780C}"), Some("\u{7812}"), Some("\u{7926}"),
            Some("\u{7820}"), Some("\u{792A}"), Some("\u{7845}"), Some("\u{788E}"), Some("\u{7874}"), Some("\u{7886}"), Some("\u{787C}"), Some("\u{789A}"),
            Some("\u{788C}"), Some("\u{78A3}"), Some("\u{78B5}"), Some("\u{78AA}"), Some("\u{78AF}"), Some("\u{78D1}"), Some("\u{78C6}"), Some("\u{78CB}"),
            Some("\u{78D4}"), Some("\u{78BE}"), Some("\u{78BC}"), Some("\u{78C5}"), Some("\u{78CA}"), Some("\u{78EC}"),
        ],
        // 1-67
        [
            Some("\u{78E7}"), Some("\u{78DA}"), Some("\u{78FD}"), Some("\u{78F4}"), Some("\u{7907}"), Some("\u{7912}"), Some("\u{7911}"), Some("\u{7919}"),
            Some("\u{792C}"), Some("\u{792B}"), Some("\u{7940}"), Some("\u{7960}"), Some("\u{7957}"), Some("\u{795F}"), Some("\u{795A}"), Some("\u{7955}"),
            Some("\u{7953}"), Some("\u{797A}"), Some("\u{797F}"), Some("\u{798A}"), Some("\u{799D}"), Some("\u{79A7}"), Some("\u{9F4B}"), Some("\u{79AA}"),
            Some("\u{79AE}"), Some("\u{79B3}"), Some("\u{79B9}"), Some("\u{79BA}"), Some("\u{79C9}"), Some("\u{79D5}"), Some("\u{79E7}"), Some("\u{79EC}"),
            Some("\u{79E1}"), Some("\u{79E3}"), Some("\u{7A08}"), Some("\u{7A0D}"), Some("\u{7A18}"), Some("\u{7A19}"), Some("\u{7A20}"), Some("\u{7A1F}"),
            Some("\u{7980}"), Some("\u{7A31}"), Some("\u{7A3B}"), Some("\u{7A3E}"), Some("\u{7A37}"), Some("\u{7A43}"), Some("\u{7A57}"), Some("\u{7A49}"),
            Some("\u{7A61}"), Some("\u{7A62}"), Some("\u{7A69}"), Some("\u{9F9D}"), Some("\u{7A70}"), Some("\u{7A79}"), Some("\u{7A7D}"), Some("\u{7A88}"),
            Some("\u{7A97}"), Some("\u{7A95}"), Some("\u{7A98}"), Some("\u{7A96}"), Some("\u{7AA9}"), Some("\u{7AC8}"), Some("\u{7AB0}"), Some("\u{7AB6}"),
            Some("\u{7AC5}"), Some("\u{7AC4}"), Some("\u{7ABF}"), Some("\u{9083}"), Some("\u{7AC7}"), Some("\u{7ACA}"), Some("\u{7ACD}"), Some("\u{7ACF}"),
            Some("\u{7AD5}"), Some("\u{7AD3}"), Some("\u{7AD9}"), Some("\u{7ADA}"), Some("\u{7ADD}"), Some("\u{7AE1}"), Some("\u{7AE2}"), Some("\u{7AE6}"),
            Some("\u{7AED}"), Some("\u{7AF0}"), Some("\u{7B02}"), Some("\u{7B0F}"), Some("\u{7B0A}"), Some("\u{7B06}"), Some("\u{7B33}"), Some("\u{7B18}"),
            Some("\u{7B19}"), Some("\u{7B1E}"), Some("\u{7B35}"), Some("\u{7B28}"), Some("\u{7B36}"), Some("\u{7B50}"),
        ],
        // 1-68
        [
            Some("\u{7B7A}"), Some("\u{7B04}"), Some("\u{7B4D}"), Some("\u{7B0B}"), Some("\u{7B4C}"), Some("\u{7B45}"), Some("\u{7B75}"), Some("\u{7B65}"),
            Some("\u{7B74}"), Some("\u{7B67}"), Some("\u{7B70}"), Some("\u{7B71}"), Some("\u{7B6C}"), Some("\u{7B6E}"), Some("\u{7B9D}"), Some("\u{7B98}"),
            Some("\u{7B9F}"), Some("\u{7B8D}"), Some("\u{7B9C}"), Some("\u{7B9A}"), Some("\u{7B8B}"), Some("\u{7B92}"), Some("\u{7B8F}"), Some("\u{7B5D}"),
            Some("\u{7B99}"), Some("\u{7BCB}"), Some("\u{7BC1}"), Some("\u{7BCC}"), Some("\u{7BCF}"), Some("\u{7BB4}"), Some("\u{7BC6}"), Some("\u{7BDD}"),
            Some("\u{7BE9}"), Some("\u{7C11}"), Some("\u{7C14}"), Some("\u{7BE6}"), Some("\u{7BE5}"), Some("\u{7C60}"), Some("\u{7C00}"), Some("\u{7C07}"),
            Some("\u{7C13}"), Some("\u{7BF3}"), Some("\u{7BF7}"), Some("\u{7C17}"), Some("\u{7C0D}"), Some("\u{7BF6}"), Some("\u{7C23}"), Some("\u{7C27}"),
            Some("\u{7C2A}"), Some("\u{7C1F}"), Some("\u{7C37}"), Some("\u{7C2B}"), Some("\u{7C3D}"), Some("\u{7C4C}"), Some("\u{7C43}"), Some("\u{7C54}"),
            Some("\u{7C4F}"), Some("\u{7C40}"), Some("\u{7C50}"), Some("\u{7C58}"), Some("\u{7C5F}"), Some("\u{7C64}"), Some("\u{7C56}"), Some("\u{7C65}"),
            Some("\u{7C6C}"), Some("\u{7C75}"), Some("\u{7C83}"), Some("\u{7C90}"), Some("\u{7CA4}"), Some("\u{7CAD}"), Some("\u{7CA2}"), Some("\u{7CAB}"),
            Some("\u{7CA1}"), Some("\u{7CA8}"), Some("\u{7CB3}"), Some("\u{7CB2}"), Some("\u{7CB1}"), Some("\u{7CAE}"), Some("\u{7CB9}"), Some("\u{7CBD}"),
            Some("\u{7CC0}"), Some("\u{7CC5}"), Some("\u{7CC2}"), Some("\u{7CD8}"), Some("\u{7CD2}"), Some("\u{7CDC}"), Some("\u{7CE2}"), Some("\u{9B3B}"),
            Some("\u{7CEF}"), Some("\u{7CF2}"), Some("\u{7CF4}"), Some("\u{7CF6}"), Some("\u{7CFA}"), Some("\u{7D06}"),
        ],
        // 1-69
        [
            Some("\u{7D02}"), Some("\u{7D1C}"), Some("\u{7D15}"), Some("\u{7D0A}"), Some("\u{7D45}"), Some("\u{7D4B}"), Some("\u{7D2E}"), Some("\u{7D32}"),
            Some("\u{7D3F}"), Some("\u{7D35}"), Some("\u{7D46}"), Some("\u{7D73}"), Some("\u{7D56}"), Some("\u{7D4E}"), Some("\u{7D72}"), Some("\u{7D68}"),
            Some("\u{7D6E}"), Some("\u{7D4F}"), Some("\u{7D63}"), Some("\u{7D93}"), Some("\u{7D89}"), Some("\u{7D5B}"), Some("\u{7D8F}"), Some("\u{7D7D}"),
            Some("\u{7D9B}"), Some("\u{7DBA}"), Some("\u{7DAE}"), Some("\u{7DA3}"), Some("\u{7DB5}"), Some("\u{7DC7}"), Some("\u{7DBD}"), Some("\u{7DAB}"),
            Some("\u{7E3D}"), Some("\u{7DA2}"), Some("\u{7DAF}"), Some("\u{7DDC}"), Some("\u{7DB8}"), Some("\u{7D9F}"), Some("\u{7DB0}"), Some("\u{7DD8}"),
            Some("\u{7DDD}"), Some("\u{7DE4}"), Some("\u{7DDE}"), Some("\u{7DFB}"), Some("\u{7DF2}"), Some("\u{7DE1}"), Some("\u{7E05}"), Some("\u{7E0A}"),
            Some("\u{7E23}"), Some("\u{7E21}"), Some("\u{7E12}"), Some("\u{7E31}"), Some("\u{7E1F}"), Some("\u{7E09}"), Some("\u{7E0B}"), Some("\u{7E22}"),
            Some("\u{7E46}"), Some("\u{7E66}"), Some("\u{7E3B}"), Some("\u{7E35}"), Some("\u{7E39}"), Some("\u{7E43}"), Some("\u{7E37}"), Some("\u{7E32}"),
            Some("\u{7E3A}"), Some("\u{7E67}"), Some("\u{7E5D}"), Some("\u{7E56}"), Some("\u{7E5E}"), Some("\u{7E59}"), Some("\u{7E5A}"), Some("\u{7E79}"),
            Some("\u{7E6A}"), Some("\u{7E69}"), Some("\u{7E7C}"), Some("\u{7E7B}"), Some("\u{7E83}"), Some("\u{7DD5}"), Some("\u{7E7D}"), Some("\u{8FAE}"),
            Some("\u{7E7F}"), Some("\u{7E88}"), Some("\u{7E89}"), Some("\u{7E8C}"), Some("\u{7E92}"), Some("\u{7E90}"), Some("\u{7E93}"), Some("\u{7E94}"),
            Some("\u{7E96}"), Some("\u{7E8E}"), Some("\u{7E9B}"), Some("\u{7E9C}"), Some("\u{7F38}"), Some("\u{7F3A}"),
        ],
        // 1-70
        [
            Some("\u{7F45}"), Some("\u{7F4C}"), Some("\u{7F4D}"), Some("\u{7F4E}"), Some("\u{7F50}"), Some("\u{7F51}"), Some("\u{7F55}"), Some("\u{7F54}"),
            Some("\u{7F58}"), Some("\u{7F5F}"), Some("\u{7F60}"), Some("\u{7F68}"), Some("\u{7F69}"), Some("\u{7F67}"), Some("\u{7F78}"), Some("\u{7F82}"),
            Some("\u{7F86}"), Some("\u{7F83}"), Some("\u{7F88}"), Some("\u{7F87}"), Some("\u{7F8C}"), Some("\u{7F94}"), Some("\u{7F9E}"), Some("\u{7F9D}"),
            Some("\u{7F9A}"), Some("\u{7FA3}"), Some("\u{7FAF}"), Some("\u{7FB2}"), Some("\u{7FB9}"), Some("\u{7FAE}"), Some("\u{7FB6}"), Some("\u{7FB8}"),
            Some("\u{8B71}"), Some("\u{7FC5}"), Some("\u{7FC6}"), Some("\u{7FCA}"), Some("\u{7FD5}"), Some("\u{7FD4}"), Some("\u{7FE1}"), Some("\u{7FE6}"),
            Some("\u{7FE9}"), Some("\u{7FF3}"), Some("\u{7FF9}"), Some("\u{98DC}"), Some("\u{8006}"), Some("\u{8004}"), Some("\u{800B}"), Some("\u{8012}"),
            Some("\u{8018}"), Some("\u{8019}"), Some("\u{801C}"), Some("\u{8021}"), Some("\u{8028}"), Some("\u{803F}"), Some("\u{803B}"), Some("\u{804A}"),
            Some("\u{8046}"), Some("\u{8052}"), Some("\u{8058}"), Some("\u{805A}"), Some("\u{805F}"), Some("\u{8062}"), Some("\u{8068}"), Some("\u{8073}"),
            Some("\u{8072}"), Some("\u{8070}"), Some("\u{8076}"), Some("\u{8079}"), Some("\u{807D}"), Some("\u{807F}"), Some("\u{8084}"), Some("\u{8086}"),
            Some("\u{8085}"), Some("\u{809B}"), Some("\u{8093}"), Some("\u{809A}"), Some("\u{80AD}"), Some("\u{5190}"), Some("\u{80AC}"), Some("\u{80DB}"),
            Some("\u{80E5}"), Some("\u{80D9}"), Some("\u{80DD}"), Some("\u{80C4}"), Some("\u{80DA}"), Some("\u{80D6}"), Some("\u{8109}"), Some("\u{80EF}"),
            Some("\u{80F1}"), Some("\u{811B}"), Some("\u{8129}"), Some("\u{8123}"), Some("\u{812F}"), Some("\u{814B}"),
        ],
        // 1-71
        [
            Some("\u{968B}"), Some("\u{8146}"), Some("\u{813E}"), Some("\u{8153}"), Some("\u{8151}"), Some("\u{80FC}"), Some("\u{8171}"), Some("\u{816E}"),
            Some("\u{8165}"), Some("\u{8166}"), Some("\u{8174}"), Some("\u{8183}"), Some("\u{8188}"), Some("\u{818A}"), Some("\u{8180}"), Some("\u{8182}"),
            Some("\u{81A0}"), Some("\u{8195}"), Some("\u{81A4}"), Some("\u{81A3}"), Some("\u{815F}"), Some("\u{8193}"), Some("\u{81A9}"), Some("\u{81B0}"),
            Some("\u{81B5}"), Some("\u{81BE}"), Some("\u{81B8}"), Some("\u{81BD}"), Some("\u{81C0}"), Some("\u{81C2}"), Some("\u{81BA}"), Some("\u{81C9}"),
            Some("\u{81CD}"), Some("\u{81D1}"), Some("\u{81D9}"), Some("\u{81D8}"), Some("\u{81C8}"), Some("\u{81DA}"), Some("\u{81DF}"), Some("\u{81E0}"),
            Some("\u{81E7}"), Some("\u{81FA}"), Some("\u{81FB}"), Some("\u{81FE}"), Some("\u{8201}"), Some("\u{8202}"), Some("\u{8205}"), Some("\u{8207}"),
            Some("\u{820A}"), Some("\u{820D}"), Some("\u{8210}"), Some("\u{8216}"), Some("\u{8229}"), Some("\u{822B}"), Some("\u{8238}"), Some("\u{8233}"),
            Some("\u{8240}"), Some("\u{8259}"), Some("\u{8258}"), Some("\u{825D}"), Some("\u{825A}"), Some("\u{825F}"), Some("\u{8264}"), Some("\u{8262}"),
            Some("\u{8268}"), Some("\u{826A}"), Some("\u{826B}"), Some("\u{822E}"), Some("\u{8271}"), Some("\u{8277}"), Some("\u{8278}"), Some("\u{827E}"),
            Some("\u{828D}"), Some("\u{8292}"), Some("\u{82AB}"), Some("\u{829F}"), Some("\u{82BB}"), Some("\u{82AC}"), Some("\u{82E1}"), Some("\u{82E3}"),
            Some("\u{82DF}"), Some("\u{82D2}"), Some("\u{82F4}"), Some("\u{82F3}"), Some("\u{82FA}"), Some("\u{8393}"), Some("\u{8303}"), Some("\u{82FB}"),
            Some("\u{82F9}"), Some("\u{82DE}"), Some("\u{8306}"), Some("\u{82DC}"), Some("\u{8309}"), Some("\u{82D9}"),
        ],
        // 1-72
        [
            Some("\u{8335}"), Some("\u{8334}"), Some("\u{8316}"), Some("\u{8332}"), Some("\u{8331}"), Some("\u{8340}"), Some("\u{8339}"), Some("\u{8350}"),
            Some("\u{8345}"), Some("\u{832F}"), Some("\u{832B}"), Some("\u{8317}"), Some("\u{8318}"), Some("\u{8385}"), Some("\u{839A}"), Some("\u{83AA}"),
            Some("\u{839F}"), Some("\u{83A2}"), Some("\u{8396}"), Some("\u{8323}"), Some("\u{838E}"), Some("\u{8387}"), Some("\u{838A}"), Some("\u{837C}"),
            Some("\u{83B5}"), Some("\u{8373}"), Some("\u{8375}"), Some("\u{83A0}"), Some("\u{8389}"), Some("\u{83A8}"), Some("\u{83F4}"), Some("\u{8413}"),
            Some("\u{83EB}"), Some("\u{83CE}"), Some("\u{83FD}"), Some("\u{8403}"), Some("\u{83D8}"), Some("\u{840B}"), Some("\u{83C1}"), Some("\u{83F7}"),
            Some("\u{8407}"), Some("\u{83E0}"), Some("\u{83F2}"), Some("\u{840D}"), Some("\u{8422}"), Some("\u{8420}"), Some("\u{83BD}"), Some("\u{8438}"),
            Some("\u{8506}"), Some("\u{83FB}"), Some("\u{846D}"), Some("\u{842A}"), Some("\u{843C}"), Some("\u{855A}"), Some("\u{8484}"), Some("\u{8477}"),
            Some("\u{846B}"), Some("\u{84AD}"), Some("\u{846E}"), Some("\u{8482}"), Some("\u{8469}"), Some("\u{8446}"), Some("\u{842C}"), Some("\u{846F}"),
            Some("\u{8479}"), Some("\u{8435}"), Some("\u{84CA}"), Some("\u{8462}"), Some("\u{84B9}"), Some("\u{84BF}"), Some("\u{849F}"), Some("\u{84D9}"),
            Some("\u{84CD}"), Some("\u{84BB}"), Some("\u{84DA}"), Some("\u{84D0}"), Some("\u{84C1}"), Some("\u{84C6}"), Some("\u{84D6}"), Some("\u{84A1}"),
            Some("\u{8521}"), Some("\u{84FF}"), Some("\u{84F4}"), Some("\u{8517}"), Some("\u{8518}"), Some("\u{852C}"), Some("\u{851F}"), Some("\u{8515}"),
            Some("\u{8514}"), Some("\u{84FC}"), Some("\u{8540}"), Some("\u{8563}"), Some("\u{8558}"), Some("\u{8548}"),
        ],
        // 1-73
        [
            Some("\u{8541}"), Some("\u{8602}"), Some("\u{854B}"), Some("\u{8555}"), Some("\u{8580}"), Some("\u{85A4}"), Some("\u{8588}"), Some("\u{8591}"),
            Some("\u{858A}"), Some("\u{85A8}"), Some("\u{856D}"), Some("\u{8594}"), Some("\u{859B}"), Some("\u{85EA}"), Some("\u{8587}"), Some("\u{859C}"),
            Some("\u{8577}"), Some("\u{857E}"), Some("\u{8590}"), Some("\u{85C9}"), Some("\u{85BA}"), Some("\u{85CF}"), Some("\u{85B9}"), Some("\u{85D0}"),
            Some("\u{85D5}"), Some("\u{85DD}"), Some("\u{85E5}"), Some("\u{85DC}"), Some("\u{85F9}"), Some("\u{860A}"), Some("\u{8613}"), Some("\u{860B}"),
            Some("\u{85FE}"), Some("\u{85FA}"), Some("\u{8606}"), Some("\u{8622}"), Some("\u{861A}"), Some("\u{8630}"), Some("\u{863F}"), Some("\u{864D}"),
            Some("\u{4E55}"), Some("\u{8654}"), Some("\u{865F}"), Some("\u{8667}"), Some("\u{8671}"), Some("\u{8693}"), Some("\u{86A3}"), Some("\u{86A9}"),
            Some("\u{86AA}"), Some("\u{868B}"), Some("\u{868C}"), Some("\u{86B6}"), Some("\u{86AF}"), Some("\u{86C4}"), Some("\u{86C6}"), Some("\u{86B0}"),
            Some("\u{86C9}"), Some("\u{8823}"), Some("\u{86AB}"), Some("\u{86D4}"), Some("\u{86DE}"), Some("\u{86E9}"), Some("\u{86EC}"), Some("\u{86DF}"),
            Some("\u{86DB}"), Some("\u{86EF}"), Some("\u{8712}"), Some("\u{8706}"), Some("\u{8708}"), Some("\u{8700}"), Some("\u{8703}"), Some("\u{86FB}"),
            Some("\u{8711}"), Some("\u{8709}"), Some("\u{870D}"), Some("\u{86F9}"), Some("\u{870A}"), Some("\u{8734}"), Some("\u{873F}"), Some("\u{8737}"),
            Some("\u{873B}"), Some("\u{8725}"), Some("\u{8729}"), Some("\u{871A}"), Some("\u{8760}"), Some("\u{875F}"), Some("\u{8778}"), Some("\u{874C}"),
            Some("\u{874E}"), Some("\u{8774}"), Some("\u{8757}"), Some("\u{8768}"), Some("\u{876E}"), Some("\u{8759}"),
        ],
        // 1-74
        [
            Some("\u{8753}"), Some("\u{8763}"), Some("\u{876A}"), Some("\u{8805}"), Some("\u{87A2}"), Some("\u{879F}"), Some("\u{8782}"), Some("\u{87AF}"),
            Some("\u{87CB}"), Some("\u{87BD}"), Some("\u{87C0}"), Some("\u{87D0}"), Some("\u{96D6}"), Some("\u{87AB}"), Some("\u{87C4}"), Some("\u{87B3}"),
            Some("\u{87C7}"), Some("\u{87C6}"), Some("\u{87BB}"), Some("\u{87EF}"), Some("\u{87F2}"), Some("\u{87E0}"), Some("\u{880F}"), Some("\u{880D}"),
            Some("\u{87FE}"), Some("\u{87F6}"), Some("\u{87F7}"), Some("\u{880E}"), Some("\u{87D2}"), Some("\u{8811}"), Some("\u{8816}"), Some("\u{8815}"),
            Some("\u{8822}"), Some("\u{8821}"), Some("\u{8831}"), Some("\u{8836}"), Some("\u{8839}"), Some("\u{8827}"), Some("\u{883B}"), Some("\u{8844}"),
            Some("\u{8842}"), Some("\u{8852}"), Some("\u{8859}"), Some("\u{885E}"), Some("\u{8862}"), Some("\u{886B}"), Some("\u{8881}"), Some("\u{887E}"),
            Some("\u{889E}"), Some("\u{8875}"), Some("\u{887D}"), Some("\u{88B5}"), Some("\u{8872}"), Some("\u{8882}"), Some("\u{8897}"), Some("\u{8892}"),
            Some("\u{88AE}"), Some("\u{8899}"), Some("\u{88A2}"), Some("\u{888D}"), Some("\u{88A4}"), Some("\u{88B0}"), Some("\u{88BF}"), Some("\u{88B1}"),
            Some("\u{88C3}"), Some("\u{88C4}"), Some("\u{88D4}"), Some("\u{88D8}"), Some("\u{88D9}"), Some("\u{88DD}"), Some("\u{88F9}"), Some("\u{8902}"),
            Some("\u{88FC}"), Some("\u{88F4}"), Some("\u{88E8}"), Some("\u{88F2}"), Some("\u{8904}"), Some("\u{890C}"), Some("\u{890A}"), Some("\u{8913}"),
            Some("\u{8943}"), Some("\u{891E}"), Some("\u{8925}"), Some("\u{892A}"), Some("\u{892B}"), Some("\u{8941}"), Some("\u{8944}"), Some("\u{893B}"),
            Some("\u{8936}"), Some("\u{8938}"), Some("\u{894C}"), Some("\u{891D}"), Some("\u{8960}"), Some("\u{895E}"),
        ],
        // 1-75
        [
            Some("\u{8966}"), Some("\u{8964}"), Some("\u{896D}"), Some("\u{896A}"), Some("\u{896F}"), Some("\u{8974}"), Some("\u{8977}"), Some("\u{897E}"),
            Some("\u{8983}"), Some("\u{8988}"), Some("\u{898A}"), Some("\u{8993}"), Some("\u{8998}"), Some("\u{89A1}"), Some("\u{89A9}"), Some("\u{89A6}"),
            Some("\u{89AC}"), Some("\u{89AF}"), Some("\u{89B2}"), Some("\u{89BA}"), Some("\u{89BD}"), Some("\u{89BF}"), Some("\u{89C0}"), Some("\u{89DA}"),
            Some("\u{89DC}"), Some("\u{89DD}"), Some("\u{89E7}"), Some("\u{89F4}"), Some("\u{89F8}"), Some("\u{8A03}"), Some("\u{8A16}"), Some("\u{8A10}"),
            Some("\u{8A0C}"), Some("\u{8A1B}"), Some("\u{8A1D}"), Some("\u{8A25}"), Some("\u{8A36}"), Some("\u{8A41}"), Some("\u{8A5B}"), Some("\u{8A52}"),
            Some("\u{8A46}"), Some("\u{8A48}"), Some("\u{8A7C}"), Some("\u{8A6D}"), Some("\u{8A6C}"), Some("\u{8A62}"), Some("\u{8A85}"), Some("\u{8A82}"),
            Some("\u{8A84}"), Some("\u{8AA8}"), Some("\u{8AA1}"), Some("\u{8A91}"), Some("\u{8AA5}"), Some("\u{8AA6}"), Some("\u{8A9A}"), Some("\u{8AA3}"),
            Some("\u{8AC4}"), Some("\u{8ACD}"), Some("\u{8AC2}"), Some("\u{8ADA}"), Some("\u{8AEB}"), Some("\u{8AF3}"), Some("\u{8AE7}"), Some("\u{8AE4}"),
            Some("\u{8AF1}"), Some("\u{8B14}"), Some("\u{8AE0}"), Some("\u{8AE2}"), Some("\u{8AF7}"), Some("\u{8ADE}"), Some("\u{8ADB}"), Some("\u{8B0C}"),
            Some("\u{8B07}"), Some("\u{8B1A}"), Some("\u{8AE1}"), Some("\u{8B16}"), Some("\u{8B10}"), Some("\u{8B17}"), Some("\u{8B20}"), Some("\u{8B33}"),
            Some("\u{97AB}"), Some("\u{8B26}"), Some("\u{8B2B}"), Some("\u{8B3E}"), Some("\u{8B28}"), Some("\u{8B41}"), Some("\u{8B4C}"), Some("\u{8B4F}"),
            Some("\u{8B4E}"), Some("\u{8B49}"), Some("\u{8B56}"), Some("\u{8B5B}"), Some("\u{8B5A}"), Some("\u{8B6B}"),
        ],
        // 1-76
        [
            Some("\u{8B5F}"), Some("\u{8B6C}"), Some("\u{8B6F}"), Some("\u{8B74}"), Some("\u{8B7D}"), Some("\u{8B80}"), Some("\u{8B8C}"), Some("\u{8B8E}"),
            Some("\u{8B92}"), Some("\u{8B93}"), Some("\u{8B96}"), Some("\u{8B99}"), Some("\u{8B9A}"), Some("\u{8C3A}"), Some("\u{8C41}"), Some("\u{8C3F}"),
            Some("\u{8C48}"), Some("\u{8C4C}"), Some("\u{8C4E}"), Some("\u{8C50}"), Some("\u{8C55}"), Some("\u{8C62}"), Some("\u{8C6C}"), Some("\u{8C78}"),
            Some("\u{8C7A}"), Some("\u{8C82}"), Some("\u{8C89}"), Some("\u{8C85}"), Some("\u{8C8A}"), Some("\u{8C8D}"), Some("\u{8C8E}"), Some("\u{8C94}"),
            Some("\u{8C7C}"), Some("\u{8C98}"), Some("\u{621D}"), Some("\u{8CAD}"), Some("\u{8CAA}"), Some("\u{8CBD}"), Some("\u{8CB2}"), Some("\u{8CB3}"),
            Some("\u{8CAE}"), Some("\u{8CB6}"), Some("\u{8CC8}"), Some("\u{8CC1}"), Some("\u{8CE4}"), Some("\u{8CE3}"), Some("\u{8CDA}"), Some("\u{8CFD}"),
            Some("\u{8CFA}"), Some("\u{8CFB}"), Some("\u{8D04}"), Some("\u{8D05}"), Some("\u{8D0A}"), Some("\u{8D07}"), Some("\u{8D0F}"), Some("\u{8D0D}"),
            Some("\u{8D10}"), Some("\u{9F4E}"), Some("\u{8D13}"), Some("\u{8CCD}"), Some("\u{8D14}"), Some("\u{8D16}"), Some("\u{8D67}"), Some("\u{8D6D}"),
            Some("\u{8D71}"), Some("\u{8D73}"), Some("\u{8D81}"), Some("\u{8D99}"), Some("\u{8DC2}"), Some("\u{8DBE}"), Some("\u{8DBA}"), Some("\u{8DCF}"),
            Some("\u{8DDA}"), Some("\u{8DD6}"), Some("\u{8DCC}"), Some("\u{8DDB}"), Some("\u{8DCB}"), Some("\u{8DEA}"), Some("\u{8DEB}"), Some("\u{8DDF}"),
            Some("\u{8DE3}"), Some("\u{8DFC}"), Some("\u{8E08}"), Some("\u{8E09}"), Some("\u{8DFF}"), Some("\u{8E1D}"), Some("\u{8E1E}"), Some("\u{8E10}"),
            Some("\u{8E1F}"), Some("\u{8E42}"), Some("\u{8E35}"), Some("\u{8E30}"), Some("\u{8E34}"), Some("\u{8E4A}"),
        ],
        // 1-77
        [
            Some("\u{8E47}"), Some("\u{8E49}"), Some("\u{8E4C}"), Some("\u{8E50}"), Some("\u{8E48}"), Some("\u{8E59}"), Some("\u{8E64}"), Some("\u{8E60}"),
            Some("\u{8E2A}"), Some("\u{8E63}"), Some("\u{8E55}"), Some("\u{8E76}"), Some("\u{8E72}"), Some("\u{8E7C}"), Some("\u{8E81}"), Some("\u{8E87}"),
            Some("\u{8E85}"), Some("\u{8E84}"), Some("\u{8E8B}"), Some("\u{8E8A}"), Some("\u{8E93}"), Some("\u{8E91}"), Some("\u{8E94}"), Some("\u{8E99}"),
            Some("\u{8EAA}"), Some("\u{8EA1}"), Some("\u{8EAC}"), Some("\u{8EB0}"), Some("\u{8EC6}"), Some("\u{8EB1}"), Some("\u{8EBE}"), Some("\u{8EC5}"),
            Some("\u{8EC8}"), Some("\u{8ECB}"), Some("\u{8EDB}"), Some("\u{8EE3}"), Some("\u{8EFC}"), Some("\u{8EFB}"), Some("\u{8EEB}"), Some("\u{8EFE}"),
            Some("\u{8F0A}"), Some("\u{8F05}"), Some("\u{8F15}"), Some("\u{8F12}"), Some("\u{8F19}"), Some("\u{8F13}"), Some("\u{8F1C}"), Some("\u{8F1F}"),
            Some("\u{8F1B}"), Some("\u{8F0C}"), Some("\u{8F26}"), Some("\u{8F33}"), Some("\u{8F3B}"), Some("\u{8F39}"), Some("\u{8F45}"), Some("\u{8F42}"),
            Some("\u{8F3E}"), Some("\u{8F4C}"), Some("\u{8F49}"), Some("\u{8F46}"), Some("\u{8F4E}"), Some("\u{8F57}"), Some("\u{8F5C}"), Some("\u{8F62}"),
            Some("\u{8F63}"), Some("\u{8F64}"), Some("\u{8F9C}"), Some("\u{8F9F}"), Some("\u{8FA3}"), Some("\u{8FAD}"), Some("\u{8FAF}"), Some("\u{8FB7}"),
            Some("\u{8FDA}"), Some("\u{8FE5}"), Some("\u{8FE2}"), Some("\u{8FEA}"), Some("\u{8FEF}"), Some("\u{9087}"), Some("\u{8FF4}"), Some("\u{9005}"),
            Some("\u{8FF9}"), Some("\u{8FFA}"), Some("\u{9011}"), Some("\u{9015}"), Some("\u{9021}"), Some("\u{900D}"), Some("\u{901E}"), Some("\u{9016}"),
            Some("\u{900B}"), Some("\u{9027}"), Some("\u{9036}"), Some("\u{9035}"), Some("\u{9039}"), Some("\u{8FF8}"),
        ],
        // 1-78
        [
            Some("\u{904F}"), Some("\u{9050}"), Some("\u{9051}"), Some("\u{9052}"), Some("\u{900E}"), Some("\u{9049}"), Some("\u{903E}"), Some("\u{9056}"),
            Some("\u{9058}"), Some("\u{905E}"), Some("\u{9068}"), Some("\u{906F}"), Some("\u{9076}"), Some("\u{96A8}"), Some("\u{9072}"), Some("\u{9082}"),
            Some("\u{907D}"), Some("\u{9081}"), Some("\u{9080}"), Some("\u{908A}"), Some("\u{9089}"), Some("\u{908F}"), Some("\u{90A8}"), Some("\u{90AF}"),
            Some("\u{90B1}"), Some("\u{90B5}"), Some("\u{90E2}"), Some("\u{90E4}"), Some("\u{6248}"), Some("\u{90DB}"), Some("\u{9102}"), Some("\u{9112}"),
            Some("\u{9119}"), Some("\u{9132}"), Some("\u{9130}"), Some("\u{914A}"), Some("\u{9156}"), Some("\u{9158}"), Some("\u{9163}"), Some("\u{9165}"),
            Some("\u{9169}"), Some("\u{9173}"), Some("\u{9172}"), Some("\u{918B}"), Some("\u{9189}"), Some("\u{9182}"), Some("\u{91A2}"), Some("\u{91AB}"),
            Some("\u{91AF}"), Some("\u{91AA}"), Some("\u{91B5}"), Some("\u{91B4}"), Some("\u{91BA}"), Some("\u{91C0}"), Some("\u{91C1}"), Some("\u{91C9}"),
            Some("\u{91CB}"), Some("\u{91D0}"), Some("\u{91D6}"), Some("\u{91DF}"), Some("\u{91E1}"), Some("\u{91DB}"), Some("\u{91FC}"), Some("\u{91F5}"),
            Some("\u{91F6}"), Some("\u{921E}"), Some("\u{91FF}"), Some("\u{9214}"), Some("\u{922C}"), Some("\u{9215}"), Some("\u{9211}"), Some("\u{925E}"),
            Some("\u{9257}"), Some("\u{9245}"), Some("\u{9249}"), Some("\u{9264}"), Some("\u{9248}"), Some("\u{9295}"), Some("\u{923F}"), Some("\u{924B}"),
            Some("\u{9250}"), Some("\u{929C}"), Some("\u{9296}"), Some("\u{9293}"), Some("\u{929B}"), Some("\u{925A}"), Some("\u{92CF}"), Some("\u{92B9}"),
            Some("\u{92B7}"), Some("\u{92E9}"), Some("\u{930F}"), Some("\u{92FA}"), Some("\u{9344}"), Some("\u{932E}"),
        ],
        // 1-79
        [
            Some("\u{9319}"), Some("\u{9322}"), Some("\u{931A}"), Some("\u{9323}"), Some("\u{933A}"), Some("\u{9335}"), Some("\u{933B}"), Some("\u{935C}"),
            Some("\u{9360}"), Some("\u{937C}"), Some("\u{936E}"), Some("\u{9356}"), Some("\u{93B0}"), Some("\u{93AC}"), Some("\u{93AD}"), Some("\u{9394}"),
            Some("\u{93B9}"), Some("\u{93D6}"), Some("\u{93D7}"), Some("\u{93E8}"), Some("\u{93E5}"), Some("\u{93D8}"), Some("\u{93C3}"), Some("\u{93DD}"),
            Some("\u{93D0}"), Some("\u{93C8}"), Some("\u{93E4}"), Some("\u{941A}"), Some("\u{9414}"), Some("\u{9413}"), Some("\u{9403}"), Some("\u{9407}"),
            Some("\u{9410}"), Some("\u{9436}"), Some("\u{942B}"), Some("\u{9435}"), Some("\u{9421}"), Some("\u{943A}"), Some("\u{9441}"), Some("\u{9452}"),
            Some("\u{9444}"), Some("\u{945B}"), Some("\u{9460}"), Some("\u{9462}"), Some("\u{945E}"), Some("\u{946A}"), Some("\u{9229}"), Some("\u{9470}"),
            Some("\u{9475}"), Some("\u{9477}"), Some("\u{947D}"), Some("\u{945A}"), Some("\u{947C}"), Some("\u{947E}"), Some("\u{9481}"), Some("\u{947F}"),
            Some("\u{9582}"), Some("\u{9587}"), Some("\u{958A}"), Some("\u{9594}"), Some("\u{9596}"), Some("\u{9598}"), Some("\u{9599}"), Some("\u{95A0}"),
            Some("\u{95A8}"), Some("\u{95A7}"), Some("\u{95AD}"), Some("\u{95BC}"), Some("\u{95BB}"), Some("\u{95B9}"), Some("\u{95BE}"), Some("\u{95CA}"),
            Some("\u{6FF6}"), Some("\u{95C3}"), Some("\u{95CD}"), Some("\u{95CC}"), Some("\u{95D5}"), Some("\u{95D4}"), Some("\u{95D6}"), Some("\u{95DC}"),
            Some("\u{95E1}"), Some("\u{95E5}"), Some("\u{95E2}"), Some("\u{9621}"), Some("\u{9628}"), Some("\u{962E}"), Some("\u{962F}"), Some("\u{9642}"),
            Some("\u{964C}"), Some("\u{964F}"), Some("\u{964B}"), Some("\u{9677}"), Some("\u{965C}"), Some("\u{965E}"),
        ],
        // 1-80
        [
            Some("\u{965D}"), Some("\u{965F}"), Some("\u{9666}"), Some("\u{9672}"), Some("\u{966C}"), Some("\u{968D}"), Some("\u{9698}"), Some("\u{9695}"),
            Some("\u{9697}"), Some("\u{96AA}"), Some("\u{96A7}"), Some("\u{96B1}"), Some("\u{96B2}"), Some("\u{96B0}"), Some("\u{96B4}"), Some("\u{96B6}"),
            Some("\u{96B8}"), Some("\u{96B9}"), Some("\u{96CE}"), Some("\u{96CB}"), Some("\u{96C9}"), Some("\u{96CD}"), Some("\u{894D}"), Some("\u{96DC}"),
            Some("\u{970D}"), Some("\u{96D5}"), Some("\u{96F9}"), Some("\u{9704}"), Some("\u{9706}"), Some("\u{9708}"), Some("\u{9713}"), Some("\u{970E}"),
            Some("\u{9711}"), Some("\u{970F}"), Some("\u{9716}"), Some("\u{9719}"), Some("\u{9724}"), Some("\u{972A}"), Some("\u{9730}"), Some("\u{9739}"),
            Some("\u{973D}"), Some("\u{973E}"), Some("\u{9744}"), Some("\u{9746}"), Some("\u{9748}"), Some("\u{9742}"), Some("\u{9749}"), Some("\u{975C}"),
            Some("\u{9760}"), Some("\u{9764}"), Some("\u{9766}"), Some("\u{9768}"), Some("\u{52D2}"), Some("\u{976B}"), Some("\u{9771}"), Some("\u{9779}"),
            Some("\u{9785}"), Some("\u{977C}"), Some("\u{9781}"), Some("\u{977A}"), Some("\u{9786}"), Some("\u{978B}"), Some("\u{978F}"), Some("\u{9790}"),
            Some("\u{979C}"), Some("\u{97A8}"), Some("\u{97A6}"), Some("\u{97A3}"), Some("\u{97B3}"), Some("\u{97B4}"), Some("\u{97C3}"), Some("\u{97C6}"),
            Some("\u{97C8}"), Some("\u{97CB}"), Some("\u{97DC}"), Some("\u{97ED}"), Some("\u{9F4F}"), Some("\u{97F2}"), Some("\u{7ADF}"), Some("\u{97F6}"),
            Some("\u{97F5}"), Some("\u{980F}"), Some("\u{980C}"), Some("\u{9838}"), Some("\u{9824}"), Some("\u{9821}"), Some("\u{9837}"), Some("\u{983D}"),
            Some("\u{9846}"), Some("\u{984F}"), Some("\u{984B}"), Some("\u{986B}"), Some("\u{986F}"), Some("\u{9870}"),
        ],
        // 1-81
        [
            Some("\u{9871}"), Some("\u{9874}"), Some("\u{9873}"), Some("\u{98AA}"), Some("\u{98AF}"), Some("\u{98B1}"), Some("\u{98B6}"), Some("\u{98C4}"),
            Some("\u{98C3}"), Some("\u{98C6}"), Some("\u{98E9}"), Some("\u{98EB}"), Some("\u{9903}"), Some("\u{9909}"), Some("\u{9912}"), Some("\u{9914}"),
            Some("\u{9918}"), Some("\u{9921}"), Some("\u{991D}"), Some("\u{991E}"), Some("\u{9924}"), Some("\u{9920}"), Some("\u{992C}"), Some("\u{992E}"),
            Some("\u{993D}"), Some("\u{993E}"), Some("\u{9942}"), Some("\u{9949}"), Some("\u{9945}"), Some("\u{9950}"), Some("\u{994B}"), Some("\u{9951}"),
            Some("\u{9952}"), Some("\u{994C}"), Some("\u{9955}"), Some("\u{9997}"), Some("\u{9998}"), Some("\u{99A5}"), Some("\u{99AD}"), Some("\u{99AE}"),
            Some("\u{99BC}"), Some("\u{99DF}"), Some("\u{99DB}"), Some("\u{99DD}"), Some("\u{99D8}"), Some("\u{99D1}"), Some("\u{99ED}"), Some("\u{99EE}"),
            Some("\u{99F1}"), Some("\u{99F2}"), Some("\u{99FB}"), Some("\u{99F8}"), Some("\u{9A01}"), Some("\u{9A0F}"), Some("\u{9A05}"), Some("\u{99E2}"),
            Some("\u{9A19}"), Some("\u{9A2B}"), Some("\u{9A37}"), Some("\u{9A45}"), Some("\u{9A42}"), Some("\u{9A40}"), Some("\u{9A43}"), Some("\u{9A3E}"),
            Some("\u{9A55}"), Some("\u{9A4D}"), Some("\u{9A5B}"), Some("\u{9A57}"), Some("\u{9A5F}"), Some("\u{9A62}"), Some("\u{9A65}"), Some("\u{9A64}"),
            Some("\u{9A69}"), Some("\u{9A6B}"), Some("\u{9A6A}"), Some("\u{9AAD}"), Some("\u{9AB0}"), Some("\u{9ABC}"), Some("\u{9AC0}"), Some("\u{9ACF}"),
            Some("\u{9AD1}"), Some("\u{9AD3}"), Some("\u{9AD4}"), Some("\u{9ADE}"), Some("\u{9ADF}"), Some("\u{9AE2}"), Some("\u{9AE3}"), Some("\u{9AE6}"),
            Some("\u{9AEF}"), Some("\u{9AEB}"), Some("\u{9AEE}"), Some("\u{9AF4}"), Some("\u{9AF1}"), Some("\u{9AF7}"),
        ],
        // 1-82
        [
            Some("\u{9AFB}"), Some("\u{9B06}"), Some("\u{9B18}"), Some("\u{9B1A}"), Some("\u{9B1F}"), Some("\u{9B22}"), Some("\u{9B23}"), Some("\u{9B25}"),
            Some("\u{9B27}"), Some("\u{9B28}"), Some("\u{9B29}"), Some("\u{9B2A}"), Some("\u{9B2E}"), Some("\u{9B2F}"), Some("\u{9B32}"), Some("\u{9B44}"),
            Some("\u{9B43}"), Some("\u{9B4F}"), Some("\u{9B4D}"), Some("\u{9B4E}"), Some("\u{9B51}"), Some("\u{9B58}"), Some("\u{9B74}"), Some("\u{9B93}"),
            Some("\u{9B83}"), Some("\u{9B91}"), Some("\u{9B96}"), Some("\u{9B97}"), Some("\u{9B9F}"), Some("\u{9BA0}"), Some("\u{9BA8}"), Some("\u{9BB4}"),
            Some("\u{9BC0}"), Some("\u{9BCA}"), Some("\u{9BB9}"), Some("\u{9BC6}"), Some("\u{9BCF}"), Some("\u{9BD1}"), Some("\u{9BD2}"), Some("\u{9BE3}"),
            Some("\u{9BE2}"), Some("\u{9BE4}"), Some("\u{9BD4}"), Some("\u{9BE1}"), Some("\u{9C3A}"), Some("\u{9BF2}"), Some("\u{9BF1}"), Some("\u{9BF0}"),
            Some("\u{9C15}"), Some("\u{9C14}"), Some("\u{9C09}"), Some("\u{9C13}"), Some("\u{9C0C}"), Some("\u{9C06}"), Some("\u{9C08}"), Some("\u{9C12}"),
            Some("\u{9C0A}"), Some("\u{9C04}"), Some("\u{9C2E}"), Some("\u{9C1B}"), Some("\u{9C25}"), Some("\u{9C24}"), Some("\u{9C21}"), Some("\u{9C30}"),
            Some("\u{9C47}"), Some("\u{9C32}"), Some("\u{9C46}"), Some("\u{9C3E}"), Some("\u{9C5A}"), Some("\u{9C60}"), Some("\u{9C67}"), Some("\u{9C76}"),
            Some("\u{9C78}"), Some("\u{9CE7}"), Some("\u{9CEC}"), Some("\u{9CF0}"), Some("\u{9D09}"), Some("\u{9D08}"), Some("\u{9CEB}"), Some("\u{9D03}"),
            Some("\u{9D06}"), Some("\u{9D2A}"), Some("\u{9D26}"), Some("\u{9DAF}"), Some("\u{9D23}"), Some("\u{9D1F}"), Some("\u{9D44}"), Some("\u{9D15}"),
            Some("\u{9D12}"), Some("\u{9D41}"), Some("\u{9D3F}"), Some("\u{9D3E}"), Some("\u{9D46}"), Some("\u{9D48}"),
        ],
        // 1-83
        [
            Some("\u{9D5D}"), Some("\u{9D5E}"), Some("\u{9D64}"), Some("\u{9D51}"), Some("\u{9D50}"), Some("\u{9D59}"), Some("\u{9D72}"), Some("\u{9D89}"),
            Some("\u{9D87}"), Some("\u{9DAB}"), Some("\u{9D6F}"), Some("\u{9D7A}"), Some("\u{9D9A}"), Some("\u{9DA4}"), Some("\u{9DA9}"), Some("\u{9DB2}"),
            Some("\u{9DC4}"), Some("\u{9DC1}"), Some("\u{9DBB}"), Some("\u{9DB8}"), Some("\u{9DBA}"), Some("\u{9DC6}"), Some("\u{9DCF}"), Some("\u{9DC2}"),
            Some("\u{9DD9}"), Some("\u{9DD3}"), Some("\u{9DF8}"), Some("\u{9DE6}"), Some("\u{9DED}"), Some("\u{9DEF}"), Some("\u{9DFD}"), Some("\u{9E1A}"),
            Some("\u{9E1B}"), Some("\u{9E1E}"), Some("\u{9E75}"), Some("\u{9E79}"), Some("\u{9E7D}"), Some("\u{9E81}"), Some("\u{9E88}"), Some("\u{9E8B}"),
            Some("\u{9E8C}"), Some("\u{9E92}"), Some("\u{9E95}"), Some("\u{9E91}"), Some("\u{9E9D}"), Some("\u{9EA5}"), Some("\u{9EA9}"), Some("\u{9EB8}"),
            Some("\u{9EAA}"), Some("\u{9EAD}"), Some("\u{9761}"), Some("\u{9ECC}"), Some("\u{9ECE}"), Some("\u{9ECF}"), Some("\u{9ED0}"), Some("\u{9ED4}"),
            Some("\u{9EDC}"), Some("\u{9EDE}"), Some("\u{9EDD}"), Some("\u{9EE0}"), Some("\u{9EE5}"), Some("\u{9EE8}"), Some("\u{9EEF}"), Some("\u{9EF4}"),
            Some("\u{9EF6}"), Some("\u{9EF7}"), Some("\u{9EF9}"), Some("\u{9EFB}"), Some("\u{9EFC}"), Some("\u{9EFD}"), Some("\u{9F07}"), Some("\u{9F08}"),
            Some("\u{76B7}"), Some("\u{9F15}"), Some("\u{9F21}"), Some("\u{9F2C}"), Some("\u{9F3E}"), Some("\u{9F4A}"), Some("\u{9F52}"), Some("\u{9F54}"),
            Some("\u{9F63}"), Some("\u{9F5F}"), Some("\u{9F60}"), Some("\u{9F61}"), Some("\u{9F66}"), Some("\u{9F67}"), Some("\u{9F6C}"), Some("\u{9F6A}"),
            Some("\u{9F77}"), Some("\u{9F72}"), Some("\u{9F76}"), Some("\u{9F95}"), Some("\u{9F9C}"), Some("\u{9FA0}"),
        ],
        // 1-84
        [
            Some("\u{582F}"), Some("\u{69C7}"), Some("\u{9059}"), Some("\u{7464}"), Some("\u{51DC}"), Some("\u{7199}"), Some("\u{5653}"), Some("\u{5DE2}"),
            Some("\u{5E14}"), Some("\u{5E18}"), Some("\u{5E58}"), Some("\u{5E5E}"), Some("\u{5EBE}"), Some("\u{F928}"), Some("\u{5ECB}"), Some("\u{5EF9}"),
            Some("\u{5F00}"), Some("\u{5F02}"), Some("\u{5F07}"), Some("\u{5F1D}"), Some("\u{5F23}"), Some("\u{5F34}"), Some("\u{5F36}"), Some("\u{5F3D}"),
            Some("\u{5F40}"), Some("\u{5F45}"), Some("\u{5F54}"), Some("\u{5F58}"), Some("\u{5F64}"), Some("\u{5F67}"), Some("\u{5F7D}"), Some("\u{5F89}"),
            Some("\u{5F9C}"), Some("\u{5FA7}"), Some("\u{5FAF}"), Some("\u{5FB5}"), Some("\u{5FB7}"), Some("\u{5FC9}"), Some("\u{5FDE}"), Some("\u{5FE1}"),
            Some("\u{5FE9}"), Some("\u{600D}"), Some("\u{6014}"), Some("\u{6018}"), Some("\u{6033}"), Some("\u{6035}"), Some("\u{6047}"), Some("\u{FA3D}"),
            Some("\u{609D}"), Some("\u{609E}"), Some("\u{60CB}"), Some("\u{60D4}"), Some("\u{60D5}"), Some("\u{60DD}"), Some("\u{60F8}"), Some("\u{611C}"),
            Some("\u{612B}"), Some("\u{6130}"), Some("\u{6137}"), Some("\u{FA3E}"), Some("\u{618D}"), Some("\u{FA3F}"), Some("\u{61BC}"), Some("\u{61B9}"),
            Some("\u{FA40}"), Some("\u{6222}"), Some("\u{623E}"), Some("\u{6243}"), Some("\u{6256}"), Some("\u{625A}"), Some("\u{626F}"), Some("\u{6285}"),
            Some("\u{62C4}"), Some("\u{62D6}"), Some("\u{62FC}"), Some("\u{630A}"), Some("\u{6318}"), Some("\u{6339}"), Some("\u{6343}"), Some("\u{6365}"),
            Some("\u{637C}"), Some("\u{63E5}"), Some("\u{63ED}"), Some("\u{63F5}"), Some("\u{6410}"), Some("\u{6414}"), Some("\u{6422}"), Some("\u{6479}"),
            Some("\u{6451}"), Some("\u{6460}"), Some("\u{646D}"), Some("\u{64CE}"), Some("\u{64BE}"), Some("\u{64BF}"),
        ],
        // 1-85
        [
            Some("\u{64C4}"), Some("\u{64CA}"), Some("\u{64D0}"), Some("\u{64F7}"), Some("\u{64FB}"), Some("\u{6522}"), Some("\u{6529}"), Some("\u{FA41}"),
            Some("\u{6567}"), Some("\u{659D}"), Some("\u{FA42}"), Some("\u{6600}"), Some("\u{6609}"), Some("\u{6615}"), Some("\u{661E}"), Some("\u{663A}"),
            Some("\u{6622}"), Some("\u{6624}"), Some("\u{662B}"), Some("\u{6630}"), Some("\u{6631}"), Some("\u{6633}"), Some("\u{66FB}"), Some("\u{6648}"),
            Some("\u{664C}"), Some("\u{231C4}"), Some("\u{6659}"), Some("\u{665A}"), Some("\u{6661}"), Some("\u{6665}"), Some("\u{6673}"), Some("\u{6677}"),
            Some("\u{6678}"), Some("\u{668D}"), Some("\u{FA43}"), Some("\u{66A0}"), Some("\u{66B2}"), Some("\u{66BB}"), Some("\u{66C6}"), Some("\u{66C8}"),
            Some("\u{3B22}"), Some("\u{66DB}"), Some("\u{66E8}"), Some("\u{66FA}"), Some("\u{6713}"), Some("\u{F929}"), Some("\u{6733}"), Some("\u{6766}"),
            Some("\u{6747}"), Some("\u{6748}"), Some("\u{677B}"), Some("\u{6781}"), Some("\u{6793}"), Some("\u{6798}"), Some("\u{679B}"), Some("\u{67BB}"),
            Some("\u{67F9}"), Some("\u{67C0}"), Some("\u{67D7}"), Some("\u{67FC}"), Some("\u{6801}"), Some("\u{6852}"), Some("\u{681D}"), Some("\u{682C}"),
            Some("\u{6831}"), Some("\u{685B}"), Some("\u{6872}"), Some("\u{6875}"), Some("\u{FA44}"), Some("\u{68A3}"), Some("\u{68A5}"), Some("\u{68B2}"),
            Some("\u{68C8}"), Some("\u{68D0}"), Some("\u{68E8}"), Some("\u{68ED}"), Some("\u{68F0}"), Some("\u{68F1}"), Some("\u{68FC}"), Some("\u{690A}"),
            Some("\u{6949}"), Some("\u{235C4}"), Some("\u{6935}"), Some("\u{6942}"), Some("\u{6957}"), Some("\u{6963}"), Some("\u{6964}"), Some("\u{6968}"),
            Some("\u{6980}"), Some("\u{FA14}"), Some("\u{69A5}"), Some("\u{69AD}"), Some("\u{69CF}"), Some("\u{3BB6}"),
        ],
        // 1-86
        [
            Some("\u{3BC3}"), Some("\u{69E2}"), Some("\u{69E9}"), Some("\u{69EA}"), Some("\u{69F5}"), Some("\u{69F6}"), Some("\u{6A0F}"), Some("\u{6A15}"),
            Some("\u{2373F}"), Some("\u{6A3B}"), Some("\u{6A3E}"), Some("\u{6A45}"), Some("\u{6A50}"), Some("\u{6A56}"), Some("\u{6A5B}"), Some("\u{6A6B}"),
            Some("\u{6A73}"), Some("\u{23763}"), Some("\u{6A89}"), Some("\u{6A94}"), Some("\u{6A9D}"), Some("\u{6A9E}"), Some("\u{6AA5}"), Some("\u{6AE4}"),
            Some("\u{6AE7}"), Some("\u{3C0F}"), Some("\u{F91D}"), Some("\u{6B1B}"), Some("\u{6B1E}"), Some("\u{6B2C}"), Some("\u{6B35}"), Some("\u{6B46}"),
            Some("\u{6B56}"), Some("\u{6B60}"), Some("\u{6B65}"), Some("\u{6B67}"), Some("\u{6B77}"), Some("\u{6B82}"), Some("\u{6BA9}"), Some("\u{6BAD}"),
            Some("\u{F970}"), Some("\u{6BCF}"), Some("\u{6BD6}"), Some("\u{6BD7}"), Some("\u{6BFF}"), Some("\u{6C05}"), Some("\u{6C10}"), Some("\u{6C33}"),
            Some("\u{6C59}"), Some("\u{6C5C}"), Some("\u{6CAA}"), Some("\u{6C74}"), Some("\u{6C76}"), Some("\u{6C85}"), Some("\u{6C86}"), Some("\u{6C98}"),
            Some("\u{6C9C}"), Some("\u{6CFB}"), Some("\u{6CC6}"), Some("\u{6CD4}"), Some("\u{6CE0}"), Some("\u{6CEB}"), Some("\u{6CEE}"), Some("\u{23CFE}"),
            Some("\u{6D04}"), Some("\u{6D0E}"), Some("\u{6D2E}"), Some("\u{6D31}"), Some("\u{6D39}"), Some("\u{6D3F}"), Some("\u{6D58}"), Some("\u{6D65}"),
            Some("\u{FA45}"), Some("\u{6D82}"), Some("\u{6D87}"), Some("\u{6D89}"), Some("\u{6D94}"), Some("\u{6DAA}"), Some("\u{6DAC}"), Some("\u{6DBF}"),
            Some("\u{6DC4}"), Some("\u{6DD6}"), Some("\u{6DDA}"), Some("\u{6DDB}"), Some("\u{6DDD}"), Some("\u{6DFC}"), Some("\u{FA46}"), Some("\u{6E34}"),
            Some("\u{6E44}"), Some("\u{6E5C}"), Some("\u{6E5E}"), Some("\u{6EAB}"), Some("\u{6EB1}"), Some("\u{6EC1}"),
        ],
        // 1-87
        [
            Some("\u{6EC7}"), Some("\u{6ECE}"), Some("\u{6F10}"), Some("\u{6F1A}"), Some("\u{FA47}"), Some("\u{6F2A}"), Some("\u{6F2F}"), Some("\u{6F33}"),
            Some("\u{6F51}"), Some("\u{6F59}"), Some("\u{6F5E}"), Some("\u{6F61}"), Some("\u{6F62}"), Some("\u{6F7E}"), Some("\u{6F88}"), Some("\u{6F8C}"),
            Some("\u{6F8D}"), Some("\u{6F94}"), Some("\u{6FA0}"), Some("\u{6FA7}"), Some("\u{6FB6}"), Some("\u{6FBC}"), Some("\u{6FC7}"), Some("\u{6FCA}"),
            Some("\u{6FF9}"), Some("\u{6FF0}"), Some("\u{6FF5}"), Some("\u{7005}"), Some("\u{7006}"), Some("\u{7028}"), Some("\u{704A}"), Some("\u{705D}"),
            Some("\u{705E}"), Some("\u{704E}"), Some("\u{7064}"), Some("\u{7075}"), Some("\u{7085}"), Some("\u{70A4}"), Some("\u{70AB}"), Some("\u{70B7}"),
            Some("\u{70D4}"), Some("\u{70D8}"), Some("\u{70E4}"), Some("\u{710F}"), Some("\u{712B}"), Some("\u{711E}"), Some("\u{7120}"), Some("\u{712E}"),
            Some("\u{7130}"), Some("\u{7146}"), Some("\u{7147}"), Some("\u{7151}"), Some("\u{FA48}"), Some("\u{7152}"), Some("\u{715C}"), Some("\u{7160}"),
            Some("\u{7168}"), Some("\u{FA15}"), Some("\u{7185}"), Some("\u{7187}"), Some("\u{7192}"), Some("\u{71C1}"), Some("\u{71BA}"), Some("\u{71C4}"),
            Some("\u{71FE}"), Some("\u{7200}"), Some("\u{7215}"), Some("\u{7255}"), Some("\u{7256}"), Some("\u{3E3F}"), Some("\u{728D}"), Some("\u{729B}"),
            Some("\u{72BE}"), Some("\u{72C0}"), Some("\u{72FB}"), Some("\u{247F1}"), Some("\u{7327}"), Some("\u{7328}"), Some("\u{FA16}"), Some("\u{7350}"),
            Some("\u{7366}"), Some("\u{737C}"), Some("\u{7395}"), Some("\u{739F}"), Some("\u{73A0}"), Some("\u{73A2}"), Some("\u{73A6}"), Some("\u{73AB}"),
            Some("\u{73C9}"), Some("\u{73CF}"), Some("\u{73D6}"), Some("\u{73D9}"), Some("\u{73E3}"), Some("\u{73E9}"),
        ],
        // 1-88
        [
            Some("\u{7407}"), Some("\u{740A}"), Some("\u{741A}"), Some("\u{741B}"), Some("\u{FA4A}"), Some("\u{7426}"), Some("\u{7428}"), Some("\u{742A}"),
            Some("\u{742B}"), Some("\u{742C}"), Some("\u{742E}"), Some("\u{742F}"), Some("\u{7430}"), Some("\u{7444}"), Some("\u{7446}"), Some("\u{7447}"),
            Some("\u{744B}"), Some("\u{7457}"), Some("\u{7462}"), Some("\u{746B}"), Some("\u{746D}"), Some("\u{7486}"), Some("\u{7487}"), Some("\u{7489}"),
            Some("\u{7498}"), Some("\u{749C}"), Some("\u{749F}"), Some("\u{74A3}"), Some("\u{7490}"), Some("\u{74A6}"), Some("\u{74A8}"), Some("\u{74A9}"),
            Some("\u{74B5}"), Some("\u{74BF}"), Some("\u{74C8}"), Some("\u{74C9}"), Some("\u{74DA}"), Some("\u{74FF}"), Some("\u{7501}"), Some("\u{7517}"),
            Some("\u{752F}"), Some("\u{756F}"), Some("\u{7579}"), Some("\u{7592}"), Some("\u{3F72}"), Some("\u{75CE}"), Some("\u{75E4}"), Some("\u{7600}"),
            Some("\u{7602}"), Some("\u{7608}"), Some("\u{7615}"), Some("\u{7616}"), Some("\u{7619}"), Some("\u{761E}"), Some("\u{762D}"), Some("\u{7635}"),
            Some("\u{7643}"), Some("\u{764B}"), Some("\u{7664}"), Some("\u{7665}"), Some("\u{766D}"), Some("\u{766F}"), Some("\u{7671}"), Some("\u{7681}"),
            Some("\u{769B}"), Some("\u{769D}"), Some("\u{769E}"), Some("\u{76A6}"), Some("\u{76AA}"), Some("\u{76B6}"), Some("\u{76C5}"), Some("\u{76CC}"),
            Some("\u{76CE}"), Some("\u{76D4}"), Some("\u{76E6}"), Some("\u{76F1}"), Some("\u{76FC}"), Some("\u{770A}"), Some("\u{7719}"), Some("\u{7734}"),
            Some("\u{7736}"), Some("\u{7746}"), Some("\u{774D}"), Some("\u{774E}"), Some("\u{775C}"), Some("\u{775F}"), Some("\u{7762}"), Some("\u{777A}"),
            Some("\u{7780}"), Some("\u{7794}"), Some("\u{77AA}"), Some("\u{77E0}"), Some("\u{782D}"), Some("\u{2548E}"),
        ],
        // 1-89
        [
            Some("\u{7843}"), Some("\u{784E}"), Some("\u{784F}"), Some("\u{7851}"), Some("\u{7868}"), Some("\u{786E}"), Some("\u{FA4B}"), Some("\u{78B0}"),
            Some("\u{2550E}"), Some("\u{78AD}"), Some("\u{78E4}"), Some("\u{78F2}"), Some("\u{7900}"), Some("\u{78F7}"), Some("\u{791C}"), Some("\u{792E}"),
            Some("\u{7931}"), Some("\u{7934}"), Some("\u{FA4C}"), Some("\u{FA4D}"), Some("\u{7945}"), Some("\u{7946}"), Some("\u{FA4E}"), Some("\u{FA4F}"),
            Some("\u{FA50}"), Some("\u{795C}"), Some("\u{FA51}"), Some("\u{FA19}"), Some("\u{FA1A}"), Some("\u{7979}"), Some("\u{FA52}"), Some("\u{FA53}"),
            Some("\u{FA1B}"), Some("\u{7998}"), Some("\u{79B1}"), Some("\u{79B8}"), Some("\u{79C8}"), Some("\u{79CA}"), Some("\u{25771}"), Some("\u{79D4}"),
            Some("\u{79DE}"), Some("\u{79EB}"), Some("\u{79ED}"), Some("\u{7A03}"), Some("\u{FA54}"), Some("\u{7A39}"), Some("\u{7A5D}"), Some("\u{7A6D}"),
            Some("\u{FA55}"), Some("\u{7A85}"), Some("\u{7AA0}"), Some("\u{259C4}"), Some("\u{7AB3}"), Some("\u{7ABB}"), Some("\u{7ACE}"), Some("\u{7AEB}"),
            Some("\u{7AFD}"), Some("\u{7B12}"), Some("\u{7B2D}"), Some("\u{7B3B}"), Some("\u{7B47}"), Some("\u{7B4E}"), Some("\u{7B60}"), Some("\u{7B6D}"),
            Some("\u{7B6F}"), Some("\u{7B72}"), Some("\u{7B9E}"), Some("\u{FA56}"), Some("\u{7BD7}"), Some("\u{7BD9}"), Some("\u{7C01}"), Some("\u{7C31}"),
            Some("\u{7C1E}"), Some("\u{7C20}"), Some("\u{7C33}"), Some("\u{7C36}"), Some("\u{4264}"), Some("\u{25DA1}"), Some("\u{7C59}"), Some("\u{7C6D}"),
            Some("\u{7C79}"), Some("\u{7C8F}"), Some("\u{7C94}"), Some("\u{7CA0}"), Some("\u{7CBC}"), Some("\u{7CD5}"), Some("\u{7CD9}"), Some("\u{7CDD}"),
            Some("\u{7D07}"), Some("\u{7D08}"), Some("\u{7D13}"), Some("\u{7D1D}"), Some("\u{7D23}"), Some("\u{7D31}"),
        ],
        // 1-90
        [
            Some("\u{7D41}"), Some("\u{7D48}"), Some("\u{7D53}"), Some("\u{7D5C}"), Some("\u{7D7A}"), Some("\u{7D83}"), Some("\u{7D8B}"), Some("\u{7DA0}"),
            Some("\u{7DA6}"), Some("\u{7DC2}"), Some("\u{7DCC}"), Some("\u{7DD6}"), Some("\u{7DE3}"), Some("\u{FA57}"), Some("\u{7E28}"), Some("\u{7E08}"),
            Some("\u{7E11}"), Some("\u{7E15}"), Some("\u{FA59}"), Some("\u{7E47}"), Some("\u{7E52}"), Some("\u{7E61}"), Some("\u{7E8A}"), Some("\u{7E8D}"),
            Some("\u{7F47}"), Some("\u{FA5A}"), Some("\u{7F91}"), Some("\u{7F97}"), Some("\u{7FBF}"), Some("\u{7FCE}"), Some("\u{7FDB}"), Some("\u{7FDF}"),
            Some("\u{7FEC}"), Some("\u{7FEE}"), Some("\u{7FFA}"), Some("\u{FA5B}"), Some("\u{8014}"), Some("\u{8026}"), Some("\u{8035}"), Some("\u{8037}"),
            Some("\u{803C}"), Some("\u{80CA}"), Some("\u{80D7}"), Some("\u{80E0}"), Some("\u{80F3}"), Some("\u{8118}"), Some("\u{814A}"), Some("\u{8160}"),
            Some("\u{8167}"), Some("\u{8168}"), Some("\u{816D}"), Some("\u{81BB}"), Some("\u{81CA}"), Some("\u{81CF}"), Some("\u{81D7}"), Some("\u{FA5C}"),
            Some("\u{4453}"), Some("\u{445B}"), Some("\u{8260}"), Some("\u{8274}"), Some("\u{26AFF}"), Some("\u{828E}"), Some("\u{82A1}"), Some("\u{82A3}"),
            Some("\u{82A4}"), Some("\u{82A9}"), Some("\u{82AE}"), Some("\u{82B7}"), Some("\u{82BE}"), Some("\u{82BF}"), Some("\u{82C6}"), Some("\u{82D5}"),
            Some("\u{82FD}"), Some("\u{82FE}"), Some("\u{8300}"), Some("\u{8301}"), Some("\u{8362}"), Some("\u{8322}"), Some("\u{832D}"), Some("\u{833A}"),
            Some("\u{8343}"), Some("\u{8347}"), Some("\u{8351}"), Some("\u{8355}"), Some("\u{837D}"), Some("\u{8386}"), Some("\u{8392}"), Some("\u{8398}"),
            Some("\u{83A7}"), Some("\u{83A9}"), Some("\u{83BF}"), Some("\u{83C0}"), Some("\u{83C7}"), Some("\u{83CF}"),
        ],
        // 1-91
        [
            Some("\u{83D1}"), Some("\u{83E1}"), Some("\u{83EA}"), Some("\u{8401}"), Some("\u{8406}"), Some("\u{840A}"), Some("\u{FA5F}"), Some("\u{8448}"),
            Some("\u{845F}"), Some("\u{8470}"), Some("\u{8473}"), Some("\u{8485}"), Some("\u{849E}"), Some("\u{84AF}"), Some("\u{84B4}"), Some("\u{84BA}"),
            Some("\u{84C0}"), Some("\u{84C2}"), Some("\u{26E40}"), Some("\u{8532}"), Some("\u{851E}"), Some("\u{8523}"), Some("\u{852F}"), Some("\u{8559}"),
            Some("\u{8564}"), Some("\u{FA1F}"), Some("\u{85AD}"), Some("\u{857A}"), Some("\u{858C}"), Some("\u{858F}"), Some("\u{85A2}"), Some("\u{85B0}"),
            Some("\u{85CB}"), Some("\u{85CE}"), Some("\u{85ED}"), Some("\u{8612}"), Some("\u{85FF}"), Some("\u{8604}"), Some("\u{8605}"), Some("\u{8610}"),
            Some("\u{270F4}"), Some("\u{8618}"), Some("\u{8629}"), Some("\u{8638}"), Some("\u{8657}"), Some("\u{865B}"), Some("\u{F936}"), Some("\u{8662}"),
            Some("\u{459D}"), Some("\u{866C}"), Some("\u{8675}"), Some("\u{8698}"), Some("\u{86B8}"), Some("\u{86FA}"), Some("\u{86FC}"), Some("\u{86FD}"),
            Some("\u{870B}"), Some("\u{8771}"), Some("\u{8787}"), Some("\u{8788}"), Some("\u{87AC}"), Some("\u{87AD}"), Some("\u{87B5}"), Some("\u{45EA}"),
            Some("\u{87D6}"), Some("\u{87EC}"), Some("\u{8806}"), Some("\u{880A}"), Some("\u{8810}"), Some("\u{8814}"), Some("\u{881F}"), Some("\u{8898}"),
            Some("\u{88AA}"), Some("\u{88CA}"), Some("\u{88CE}"), Some("\u{27684}"), Some("\u{88F5}"), Some("\u{891C}"), Some("\u{FA60}"), Some("\u{8918}"),
            Some("\u{8919}"), Some("\u{891A}"), Some("\u{8927}"), Some("\u{8930}"), Some("\u{8932}"), Some("\u{8939}"), Some("\u{8940}"), Some("\u{8994}"),
            Some("\u{FA61}"), Some("\u{89D4}"), Some("\u{89E5}"), Some("\u{89F6}"), Some("\u{8A12}"), Some("\u{8A15}"),
        ],
        // 1-92
        [
            Some("\u{8A22}"), Some("\u{8A37}"), Some("\u{8A47}"), Some("\u{8A4E}"), Some("\u{8A5D}"), Some("\u{8A61}"), Some("\u{8A75}"), Some("\u{8A79}"),
            Some("\u{8AA7}"), Some("\u{8AD0}"), Some("\u{8ADF}"), Some("\u{8AF4}"), Some("\u{8AF6}"), Some("\u{FA22}"), Some("\u{FA62}"), Some("\u{FA63}"),
            Some("\u{8B46}"), Some("\u{8B54}"), Some("\u{8B59}"), Some("\u{8B69}"), Some("\u{8B9D}"), Some("\u{8C49}"), Some("\u{8C68}"), Some("\u{FA64}"),
            Some("\u{8CE1}"), Some("\u{8CF4}"), Some("\u{8CF8}"), Some("\u{8CFE}"), Some("\u{FA65}"), Some("\u{8D12}"), Some("\u{8D1B}"), Some("\u{8DAF}"),
            Some("\u{8DCE}"), Some("\u{8DD1}"), Some("\u{8DD7}"), Some("\u{8E20}"), Some("\u{8E23}"), Some("\u{8E3D}"), Some("\u{8E70}"), Some("\u{8E7B}"),
            Some("\u{28277}"), Some("\u{8EC0}"), Some("\u{4844}"), Some("\u{8EFA}"), Some("\u{8F1E}"), Some("\u{8F2D}"), Some("\u{8F36}"), Some("\u{8F54}"),
            Some("\u{283CD}"), Some("\u{8FA6}"), Some("\u{8FB5}"), Some("\u{8FE4}"), Some("\u{8FE8}"), Some("\u{8FEE}"), Some("\u{9008}"), Some("\u{902D}"),
            Some("\u{FA67}"), Some("\u{9088}"), Some("\u{9095}"), Some("\u{9097}"), Some("\u{9099}"), Some("\u{909B}"), Some("\u{90A2}"), Some("\u{90B3}"),
            Some("\u{90BE}"), Some("\u{90C4}"), Some("\u{90C5}"), Some("\u{90C7}"), Some("\u{90D7}"), Some("\u{90DD}"), Some("\u{90DE}"), Some("\u{90EF}"),
            Some("\u{90F4}"), Some("\u{FA26}"), Some("\u{9114}"), Some("\u{9115}"), Some("\u{9116}"), Some("\u{9122}"), Some("\u{9123}"), Some("\u{9127}"),
            Some("\u{912F}"), Some("\u{9131}"), Some("\u{9134}"), Some("\u{913D}"), Some("\u{9148}"), Some("\u{915B}"), Some("\u{9183}"), Some("\u{919E}"),
            Some("\u{91AC}"), Some("\u{91B1}"), Some("\u{91BC}"), Some("\u{91D7}"), Some("\u{91FB}"), Some("\u{91E4}"),
        ],
        // 1-93
        [
            Some("\u{91E5}"), Some("\u{91ED}"), Some("\u{91F1}"), Some("\u{9207}"), Some("\u{9210}"), Some("\u{9238}"), Some("\u{9239}"), Some("\u{923A}"),
            Some("\u{923C}"), Some("\u{9240}"), Some("\u{9243}"), Some("\u{924F}"), Some("\u{9278}"), Some("\u{9288}"), Some("\u{92C2}"), Some("\u{92CB}"),
            Some("\u{92CC}"), Some("\u{92D3}"), Some("\u{92E0}"), Some("\u{92FF}"), Some("\u{9304}"), Some("\u{931F}"), Some("\u{9321}"), Some("\u{9325}"),
            Some("\u{9348}"), Some("\u{9349}"), Some("\u{934A}"), Some("\u{9364}"), Some("\u{9365}"), Some("\u{936A}"), Some("\u{9370}"), Some("\u{939B}"),
            Some("\u{93A3}"), Some("\u{93BA}"), Some("\u{93C6}"), Some("\u{93DE}"), Some("\u{93DF}"), Some("\u{9404}"), Some("\u{93FD}"), Some("\u{9433}"),
            Some("\u{944A}"), Some("\u{9463}"), Some("\u{946B}"), Some("\u{9471}"), Some("\u{9472}"), Some("\u{958E}"), Some("\u{959F}"), Some("\u{95A6}"),
            Some("\u{95A9}"), Some("\u{95AC}"), Some("\u{95B6}"), Some("\u{95BD}"), Some("\u{95CB}"), Some("\u{95D0}"), Some("\u{95D3}"), Some("\u{49B0}"),
            Some("\u{95DA}"), Some("\u{95DE}"), Some("\u{9658}"), Some("\u{9684}"), Some("\u{F9DC}"), Some("\u{969D}"), Some("\u{96A4}"), Some("\u{96A5}"),
            Some("\u{96D2}"), Some("\u{96DE}"), Some("\u{FA68}"), Some("\u{96E9}"), Some("\u{96EF}"), Some("\u{9733}"), Some("\u{973B}"), Some("\u{974D}"),
            Some("\u{974E}"), Some("\u{974F}"), Some("\u{975A}"), Some("\u{976E}"), Some("\u{9773}"), Some("\u{9795}"), Some("\u{97AE}"), Some("\u{97BA}"),
            Some("\u{97C1}"), Some("\u{97C9}"), Some("\u{97DE}"), Some("\u{97DB}"), Some("\u{97F4}"), Some("\u{FA69}"), Some("\u{980A}"), Some("\u{981E}"),
            Some("\u{982B}"), Some("\u{9830}"), Some("\u{FA6A}"), Some("\u{9852}"), Some("\u{9853}"), Some("\u{9856}"),
        ],
        // 1-94
        [
            Some("\u{9857}"), Some("\u{9859}"), Some("\u{985A}"), Some("\u{F9D0}"), Some("\u{9865}"), Some("\u{986C}"), Some("\u{98BA}"), Some("\u{98C8}"),
            Some("\u{98E7}"), Some("\u{9958}"), Some("\u{999E}"), Some("\u{9A02}"), Some("\u{9A03}"), Some("\u{9A24}"), Some("\u{9A2D}"), Some("\u{9A2E}"),
            Some("\u{9A38}"), Some("\u{9A4A}"), Some("\u{9A4E}"), Some("\u{9A52}"), Some("\u{9AB6}"), Some("\u{9AC1}"), Some("\u{9AC3}"), Some("\u{9ACE}"),
            Some("\u{9AD6}"), Some("\u{9AF9}"), Some("\u{9B02}"), Some("\u{9B08}"), Some("\u{9B20}"), Some("\u{4C17}"), Some("\u{9B2D}"), Some("\u{9B5E}"),
            Some("\u{9B79}"), Some("\u{9B66}"), Some("\u{9B72}"), Some("\u{9B75}"), Some("\u{9B84}"), Some("\u{9B8A}"), Some("\u{9B8F}"), Some("\u{9B9E}"),
            Some("\u{9BA7}"), Some("\u{9BC1}"), Some("\u{9BCE}"), Some("\u{9BE5}"), Some("\u{9BF8}"), Some("\u{9BFD}"), Some("\u{9C00}"), Some("\u{9C23}"),
            Some("\u{9C41}"), Some("\u{9C4F}"), Some("\u{9C50}"), Some("\u{9C53}"), Some("\u{9C63}"), Some("\u{9C65}"), Some("\u{9C77}"), Some("\u{9D1D}"),
            Some("\u{9D1E}"), Some("\u{9D43}"), Some("\u{9D47}"), Some("\u{9D52}"), Some("\u{9D63}"), Some("\u{9D70}"), Some("\u{9D7C}"), Some("\u{9D8A}"),
            Some("\u{9D96}"), Some("\u{9DC0}"), Some("\u{9DAC}"), Some("\u{9DBC}"), Some("\u{9DD7}"), Some("\u{2A190}"), Some("\u{9DE7}"), Some("\u{9E07}"),
            Some("\u{9E15}"), Some("\u{9E7C}"), Some("\u{9E9E}"), Some("\u{9EA4}"), Some("\u{9EAC}"), Some("\u{9EAF}"), Some("\u{9EB4}"), Some("\u{9EB5}"),
            Some("\u{9EC3}"), Some("\u{9ED1}"), Some("\u{9F10}"), Some("\u{9F39}"), Some("\u{9F57}"), Some("\u{9F90}"), Some("\u{9F94}"), Some("\u{9F97}"),
            Some("\u{9FA2}"), Some("\u{59F8}"), Some("\u{5C5B}"), Some("\u{5E77}"), Some("\u{7626}"), Some("\u{7E6B}"),
        ],
    ],
    [
        // 2-1
        [
            Some("\u{20089}"), Some("\u{4E02}"), Some("\u{4E0F}"), Some("\u{4E12}"), Some("\u{4E29}"), Some("\u{4E2B}"), Some("\u{4E2E}"), Some("\u{4E40}"),
            Some("\u{4E47}"), Some("\u{4E48}"), Some("\u{200A2}"), Some("\u{4E51}"), Some("\u{3406}"), Some("\u{200A4}"), Some("\u{4E5A}"), Some("\u{4E69}"),
            Some("\u{4E9D}"), Some("\u{342C}"), Some("\u{342E}"), Some("\u{4EB9}"), Some("\u{4EBB}"), Some("\u{201A2}"), Some("\u{4EBC}"), Some("\u{4EC3}"),
            Some("\u{4EC8}"), Some("\u{4ED0}"), Some("\u{4EEB}"), Some("\u{4EDA}"), Some("\u{4EF1}"), Some("\u{4EF5}"), Some("\u{4F00}"), Some("\u{4F16}"),
            Some("\u{4F64}"), Some("\u{4F37}"), Some("\u{4F3E}"), Some("\u{4F54}"), Some("\u{4F58}"), Some("\u{20213}"), Some("\u{4F77}"), Some("\u{4F78}"),
            Some("\u{4F7A}"), Some("\u{4F7D}"), Some("\u{4F82}"), Some("\u{4F85}"), Some("\u{4F92}"), Some("\u{4F9A}"), Some("\u{4FE6}"), Some("\u{4FB2}"),
            Some("\u{4FBE}"), Some("\u{4FC5}"), Some("\u{4FCB}"), Some("\u{4FCF}"), Some("\u{4FD2}"), Some("\u{346A}"), Some("\u{4FF2}"), Some("\u{5000}"),
            Some("\u{5010}"), Some("\u{5013}"), Some("\u{501C}"), Some("\u{501E}"), Some("\u{5022}"), Some("\u{3468}"), Some("\u{5042}"), Some("\u{5046}"),
            Some("\u{504E}"), Some("\u{5053}"), Some("\u{5057}"), Some("\u{5063}"), Some("\u{5066}"), Some("\u{506A}"), Some("\u{5070}"), Some("\u{50A3}"),
            Some("\u{5088}"), Some("\u{5092}"), Some("\u{5093}"), Some("\u{5095}"), Some("\u{5096}"), Some("\u{509C}"), Some("\u{50AA}"), Some("\u{2032B}"),
            Some("\u{50B1}"), Some("\u{50BA}"), Some("\u{50BB}"), Some("\u{50C4}"), Some("\u{50C7}"), Some("\u{50F3}"), Some("\u{20381}"), Some("\u{50CE}"),
            Some("\u{20371}"), Some("\u{50D4}"), Some("\u{50D9}"), Some("\u{50E1}"), Some("\u{50E9}"), Some("\u{3492}"),
        ],
        // 2-2
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-3
        [
            Some("\u{5108}"), Some("\u{203F9}"), Some("\u{5117}"), Some("\u{511B}"), Some("\u{2044A}"), Some("\u{5160}"), Some("\u{20509}"), Some("\u{5173}"),
            Some("\u{5183}"), Some("\u{518B}"), Some("\u{34BC}"), Some("\u{5198}"), Some("\u{51A3}"), Some("\u{51AD}"), Some("\u{34C7}"), Some("\u{51BC}"),
            Some("\u{205D6}"), Some("\u{20628}"), Some("\u{51F3}"), Some("\u{51F4}"), Some("\u{5202}"), Some("\u{5212}"), Some("\u{5216}"), Some("\u{2074F}"),
            Some("\u{5255}"), Some("\u{525C}"), Some("\u{526C}"), Some("\u{5277}"), Some("\u{5284}"), Some("\u{5282}"), Some("\u{20807}"), Some("\u{5298}"),
            Some("\u{2083A}"), Some("\u{52A4}"), Some("\u{52A6}"), Some("\u{52AF}"), Some("\u{52BA}"), Some("\u{52BB}"), Some("\u{52CA}"), Some("\u{351F}"),
            Some("\u{52D1}"), Some("\u{208B9}"), Some("\u{52F7}"), Some("\u{530A}"), Some("\u{530B}"), Some("\u{5324}"), Some("\u{5335}"), Some("\u{533E}"),
            Some("\u{5342}"), Some("\u{2097C}"), Some("\u{2099D}"), Some("\u{5367}"), Some("\u{536C}"), Some("\u{537A}"), Some("\u{53A4}"), Some("\u{53B4}"),
            Some("\u{20AD3}"), Some("\u{53B7}"), Some("\u{53C0}"), Some("\u{20B1D}"), Some("\u{355D}"), Some("\u{355E}"), Some("\u{53D5}"), Some("\u{53DA}"),
            Some("\u{3563}"), Some("\u{53F4}"), Some("\u{53F5}"), Some("\u{5455}"), Some("\u{5424}"), Some("\u{5428}"), Some("\u{356E}"), Some("\u{5443}"),
            Some("\u{5462}"), Some("\u{5466}"), Some("\u{546C}"), Some("\u{548A}"), Some("\u{548D}"), Some("\u{5495}"), Some("\u{54A0}"), Some("\u{54A6}"),
            Some("\u{54AD}"), Some("\u{54AE}"), Some("\u{54B7}"), Some("\u{54BA}"), Some("\u{54BF}"), Some("\u{54C3}"), Some("\u{20D45}"), Some("\u{54EC}"),
            Some("\u{54EF}"), Some("\u{54F1}"), Some("\u{54F3}"), Some("\u{5500}"), Some("\u{5501}"), Some("\u{5509}"),
        ],
        // 2-4
        [
            Some("\u{553C}"), Some("\u{5541}"), Some("\u{35A6}"), Some("\u{5547}"), Some("\u{554A}"), Some("\u{35A8}"), Some("\u{5560}"), Some("\u{5561}"),
            Some("\u{5564}"), Some("\u{20DE1}"), Some("\u{557D}"), Some("\u{5582}"), Some("\u{5588}"), Some("\u{5591}"), Some("\u{35C5}"), Some("\u{55D2}"),
            Some("\u{20E95}"), Some("\u{20E6D}"), Some("\u{55BF}"), Some("\u{55C9}"), Some("\u{55CC}"), Some("\u{55D1}"), Some("\u{55DD}"), Some("\u{35DA}"),
            Some("\u{55E2}"), Some("\u{20E64}"), Some("\u{55E9}"), Some("\u{5628}"), Some("\u{20F5F}"), Some("\u{5607}"), Some("\u{5610}"), Some("\u{5630}"),
            Some("\u{5637}"), Some("\u{35F4}"), Some("\u{563D}"), Some("\u{563F}"), Some("\u{5640}"), Some("\u{5647}"), Some("\u{565E}"), Some("\u{5660}"),
            Some("\u{566D}"), Some("\u{3605}"), Some("\u{5688}"), Some("\u{568C}"), Some("\u{5695}"), Some("\u{569A}"), Some("\u{569D}"), Some("\u{56A8}"),
            Some("\u{56AD}"), Some("\u{56B2}"), Some("\u{56C5}"), Some("\u{56CD}"), Some("\u{56DF}"), Some("\u{56E8}"), Some("\u{56F6}"), Some("\u{56F7}"),
            Some("\u{21201}"), Some("\u{5715}"), Some("\u{5723}"), Some("\u{21255}"), Some("\u{5729}"), Some("\u{2127B}"), Some("\u{5745}"), Some("\u{5746}"),
            Some("\u{574C}"), Some("\u{574D}"), Some("\u{21274}"), Some("\u{5768}"), Some("\u{576F}"), Some("\u{5773}"), Some("\u{5774}"), Some("\u{5775}"),
            Some("\u{577B}"), Some("\u{212E4}"), Some("\u{212D7}"), Some("\u{57AC}"), Some("\u{579A}"), Some("\u{579D}"), Some("\u{579E}"), Some("\u{57A8}"),
            Some("\u{57D7}"), Some("\u{212FD}"), Some("\u{57CC}"), Some("\u{21336}"), Some("\u{21344}"), Some("\u{57DE}"), Some("\u{57E6}"), Some("\u{57F0}"),
            Some("\u{364A}"), Some("\u{57F8}"), Some("\u{57FB}"), Some("\u{57FD}"), Some("\u{5804}"), Some("\u{581E}"),
        ],
        // 2-5
        [
            Some("\u{5820}"), Some("\u{5827}"), Some("\u{5832}"), Some("\u{5839}"), Some("\u{213C4}"), Some("\u{5849}"), Some("\u{584C}"), Some("\u{5867}"),
            Some("\u{588A}"), Some("\u{588B}"), Some("\u{588D}"), Some("\u{588F}"), Some("\u{5890}"), Some("\u{5894}"), Some("\u{589D}"), Some("\u{58AA}"),
            Some("\u{58B1}"), Some("\u{2146D}"), Some("\u{58C3}"), Some("\u{58CD}"), Some("\u{58E2}"), Some("\u{58F3}"), Some("\u{58F4}"), Some("\u{5905}"),
            Some("\u{5906}"), Some("\u{590B}"), Some("\u{590D}"), Some("\u{5914}"), Some("\u{5924}"), Some("\u{215D7}"), Some("\u{3691}"), Some("\u{593D}"),
            Some("\u{3699}"), Some("\u{5946}"), Some("\u{3696}"), Some("\u{26C29}"), Some("\u{595B}"), Some("\u{595F}"), Some("\u{21647}"), Some("\u{5975}"),
            Some("\u{5976}"), Some("\u{597C}"), Some("\u{599F}"), Some("\u{59AE}"), Some("\u{59BC}"), Some("\u{59C8}"), Some("\u{59CD}"), Some("\u{59DE}"),
            Some("\u{59E3}"), Some("\u{59E4}"), Some("\u{59E7}"), Some("\u{59EE}"), Some("\u{21706}"), Some("\u{21742}"), Some("\u{36CF}"), Some("\u{5A0C}"),
            Some("\u{5A0D}"), Some("\u{5A17}"), Some("\u{5A27}"), Some("\u{5A2D}"), Some("\u{5A55}"), Some("\u{5A65}"), Some("\u{5A7A}"), Some("\u{5A8B}"),
            Some("\u{5A9C}"), Some("\u{5A9F}"), Some("\u{5AA0}"), Some("\u{5AA2}"), Some("\u{5AB1}"), Some("\u{5AB3}"), Some("\u{5AB5}"), Some("\u{5ABA}"),
            Some("\u{5ABF}"), Some("\u{5ADA}"), Some("\u{5ADC}"), Some("\u{5AE0}"), Some("\u{5AE5}"), Some("\u{5AF0}"), Some("\u{5AEE}"), Some("\u{5AF5}"),
            Some("\u{5B00}"), Some("\u{5B08}"), Some("\u{5B17}"), Some("\u{5B34}"), Some("\u{5B2D}"), Some("\u{5B4C}"), Some("\u{5B52}"), Some("\u{5B68}"),
            Some("\u{5B6F}"), Some("\u{5B7C}"), Some("\u{5B7F}"), Some("\u{5B81}"), Some("\u{5B84}"), Some("\u{219C3}"),
        ],
        // 2-6
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-7
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-8
        [
            Some("\u{5B96}"), Some("\u{5BAC}"), Some("\u{3761}"), Some("\u{5BC0}"), Some("\u{3762}"), Some("\u{5BCE}"), Some("\u{5BD6}"), Some("\u{376C}"),
            Some("\u{376B}"), Some("\u{5BF1}"), Some("\u{5BFD}"), Some("\u{3775}"), Some("\u{5C03}"), Some("\u{5C29}"), Some("\u{5C30}"), Some("\u{21C56}"),
            Some("\u{5C5F}"), Some("\u{5C63}"), Some("\u{5C67}"), Some("\u{5C68}"), Some("\u{5C69}"), Some("\u{5C70}"), Some("\u{21D2D}"), Some("\u{21D45}"),
            Some("\u{5C7C}"), Some("\u{21D78}"), Some("\u{21D62}"), Some("\u{5C88}"), Some("\u{5C8A}"), Some("\u{37C1}"), Some("\u{21DA1}"), Some("\u{21D9C}"),
            Some("\u{5CA0}"), Some("\u{5CA2}"), Some("\u{5CA6}"), Some("\u{5CA7}"), Some("\u{21D92}"), Some("\u{5CAD}"), Some("\u{5CB5}"), Some("\u{21DB7}"),
            Some("\u{5CC9}"), Some("\u{21DE0}"), Some("\u{21E33}"), Some("\u{5D06}"), Some("\u{5D10}"), Some("\u{5D2B}"), Some("\u{5D1D}"), Some("\u{5D20}"),
            Some("\u{5D24}"), Some("\u{5D26}"), Some("\u{5D31}"), Some("\u{5D39}"), Some("\u{5D42}"), Some("\u{37E8}"), Some("\u{5D61}"), Some("\u{5D6A}"),
            Some("\u{37F4}"), Some("\u{5D70}"), Some("\u{21F1E}"), Some("\u{37FD}"), Some("\u{5D88}"), Some("\u{3800}"), Some("\u{5D92}"), Some("\u{5D94}"),
            Some("\u{5D97}"), Some("\u{5D99}"), Some("\u{5DB0}"), Some("\u{5DB2}"), Some("\u{5DB4}"), Some("\u{21F76}"), Some("\u{5DB9}"), Some("\u{5DD1}"),
            Some("\u{5DD7}"), Some("\u{5DD8}"), Some("\u{5DE0}"), Some("\u{21FFA}"), Some("\u{5DE4}"), Some("\u{5DE9}"), Some("\u{382F}"), Some("\u{5E00}"),
            Some("\u{3836}"), Some("\u{5E12}"), Some("\u{5E15}"), Some("\u{3840}"), Some("\u{5E1F}"), Some("\u{5E2E}"), Some("\u{5E3E}"), Some("\u{5E49}"),
            Some("\u{385C}"), Some("\u{5E56}"), Some("\u{3861}"), Some("\u{5E6B}"), Some("\u{5E6C}"), Some("\u{5E6D}"),
        ],
        // 2-9
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-10
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-11
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-12
        [
            Some("\u{5E6E}"), Some("\u{2217B}"), Some("\u{5EA5}"), Some("\u{5EAA}"), Some("\u{5EAC}"), Some("\u{5EB9}"), Some("\u{5EBF}"), Some("\u{5EC6}"),
            Some("\u{5ED2}"), Some("\u{5ED9}"), Some("\u{2231E}"), Some("\u{5EFD}"), Some("\u{5F08}"), Some("\u{5F0E}"), Some("\u{5F1C}"), Some("\u{223AD}"),
            Some("\u{5F1E}"), Some("\u{5F47}"), Some("\u{5F63}"), Some("\u{5F72}"), Some("\u{5F7E}"), Some("\u{5F8F}"), Some("\u{5FA2}"), Some("\u{5FA4}"),
            Some("\u{5FB8}"), Some("\u{5FC4}"), Some("\u{38FA}"), Some("\u{5FC7}"), Some("\u{5FCB}"), Some("\u{5FD2}"), Some("\u{5FD3}"), Some("\u{5FD4}"),
            Some("\u{5FE2}"), Some("\u{5FEE}"), Some("\u{5FEF}"), Some("\u{5FF3}"), Some("\u{5FFC}"), Some("\u{3917}"), Some("\u{6017}"), Some("\u{6022}"),
            Some("\u{6024}"), Some("\u{391A}"), Some("\u{604C}"), Some("\u{607F}"), Some("\u{608A}"), Some("\u{6095}"), Some("\u{60A8}"), Some("\u{226F3}"),
            Some("\u{60B0}"), Some("\u{60B1}"), Some("\u{60BE}"), Some("\u{60C8}"), Some("\u{60D9}"), Some("\u{60DB}"), Some("\u{60EE}"), Some("\u{60F2}"),
            Some("\u{60F5}"), Some("\u{6110}"), Some("\u{6112}"), Some("\u{6113}"), Some("\u{6119}"), Some("\u{611E}"), Some("\u{613A}"), Some("\u{396F}"),
            Some("\u{6141}"), Some("\u{6146}"), Some("\u{6160}"), Some("\u{617C}"), Some("\u{2285B}"), Some("\u{6192}"), Some("\u{6193}"), Some("\u{6197}"),
            Some("\u{6198}"), Some("\u{61A5}"), Some("\u{61A8}"), Some("\u{61AD}"), Some("\u{228AB}"), Some("\u{61D5}"), Some("\u{61DD}"), Some("\u{61DF}"),
            Some("\u{61F5}"), Some("\u{2298F}"), Some("\u{6215}"), Some("\u{6223}"), Some("\u{6229}"), Some("\u{6246}"), Some("\u{624C}"), Some("\u{6251}"),
            Some("\u{6252}"), Some("\u{6261}"), Some("\u{6264}"), Some("\u{627B}"), Some("\u{626D}"), Some("\u{6273}"),
        ],
        // 2-13
        [
            Some("\u{6299}"), Some("\u{62A6}"), Some("\u{62D5}"), Some("\u{22AB8}"), Some("\u{62FD}"), Some("\u{6303}"), Some("\u{630D}"), Some("\u{6310}"),
            Some("\u{22B4F}"), Some("\u{22B50}"), Some("\u{6332}"), Some("\u{6335}"), Some("\u{633B}"), Some("\u{633C}"), Some("\u{6341}"), Some("\u{6344}"),
            Some("\u{634E}"), Some("\u{22B46}"), Some("\u{6359}"), Some("\u{22C1D}"), Some("\u{22BA6}"), Some("\u{636C}"), Some("\u{6384}"), Some("\u{6399}"),
            Some("\u{22C24}"), Some("\u{6394}"), Some("\u{63BD}"), Some("\u{63F7}"), Some("\u{63D4}"), Some("\u{63D5}"), Some("\u{63DC}"), Some("\u{63E0}"),
            Some("\u{63EB}"), Some("\u{63EC}"), Some("\u{63F2}"), Some("\u{6409}"), Some("\u{641E}"), Some("\u{6425}"), Some("\u{6429}"), Some("\u{642F}"),
            Some("\u{645A}"), Some("\u{645B}"), Some("\u{645D}"), Some("\u{6473}"), Some("\u{647D}"), Some("\u{6487}"), Some("\u{6491}"), Some("\u{649D}"),
            Some("\u{649F}"), Some("\u{64CB}"), Some("\u{64CC}"), Some("\u{64D5}"), Some("\u{64D7}"), Some("\u{22DE1}"), Some("\u{64E4}"), Some("\u{64E5}"),
            Some("\u{64FF}"), Some("\u{6504}"), Some("\u{3A6E}"), Some("\u{650F}"), Some("\u{6514}"), Some("\u{6516}"), Some("\u{3A73}"), Some("\u{651E}"),
            Some("\u{6532}"), Some("\u{6544}"), Some("\u{6554}"), Some("\u{656B}"), Some("\u{657A}"), Some("\u{6581}"), Some("\u{6584}"), Some("\u{6585}"),
            Some("\u{658A}"), Some("\u{65B2}"), Some("\u{65B5}"), Some("\u{65B8}"), Some("\u{65BF}"), Some("\u{65C2}"), Some("\u{65C9}"), Some("\u{65D4}"),
            Some("\u{3AD6}"), Some("\u{65F2}"), Some("\u{65F9}"), Some("\u{65FC}"), Some("\u{6604}"), Some("\u{6608}"), Some("\u{6621}"), Some("\u{662A}"),
            Some("\u{6645}"), Some("\u{6651}"), Some("\u{664E}"), Some("\u{3AEA}"), Some("\u{231C3}"), Some("\u{6657}"),
        ],
        // 2-14
        [
            Some("\u{665B}"), Some("\u{6663}"), Some("\u{231F5}"), Some("\u{231B6}"), Some("\u{666A}"), Some("\u{666B}"), Some("\u{666C}"), Some("\u{666D}"),
            Some("\u{667B}"), Some("\u{6680}"), Some("\u{6690}"), Some("\u{6692}"), Some("\u{6699}"), Some("\u{3B0E}"), Some("\u{66AD}"), Some("\u{66B1}"),
            Some("\u{66B5}"), Some("\u{3B1A}"), Some("\u{66BF}"), Some("\u{3B1C}"), Some("\u{66EC}"), Some("\u{3AD7}"), Some("\u{6701}"), Some("\u{6705}"),
            Some("\u{6712}"), Some("\u{23372}"), Some("\u{6719}"), Some("\u{233D3}"), Some("\u{233D2}"), Some("\u{674C}"), Some("\u{674D}"), Some("\u{6754}"),
            Some("\u{675D}"), Some("\u{233D0}"), Some("\u{233E4}"), Some("\u{233D5}"), Some("\u{6774}"), Some("\u{6776}"), Some("\u{233DA}"), Some("\u{6792}"),
            Some("\u{233DF}"), Some("\u{8363}"), Some("\u{6810}"), Some("\u{67B0}"), Some("\u{67B2}"), Some("\u{67C3}"), Some("\u{67C8}"), Some("\u{67D2}"),
            Some("\u{67D9}"), Some("\u{67DB}"), Some("\u{67F0}"), Some("\u{67F7}"), Some("\u{2344A}"), Some("\u{23451}"), Some("\u{2344B}"), Some("\u{6818}"),
            Some("\u{681F}"), Some("\u{682D}"), Some("\u{23465}"), Some("\u{6833}"), Some("\u{683B}"), Some("\u{683E}"), Some("\u{6844}"), Some("\u{6845}"),
            Some("\u{6849}"), Some("\u{684C}"), Some("\u{6855}"), Some("\u{6857}"), Some("\u{3B77}"), Some("\u{686B}"), Some("\u{686E}"), Some("\u{687A}"),
            Some("\u{687C}"), Some("\u{6882}"), Some("\u{6890}"), Some("\u{6896}"), Some("\u{3B6D}"), Some("\u{6898}"), Some("\u{6899}"), Some("\u{689A}"),
            Some("\u{689C}"), Some("\u{68AA}"), Some("\u{68AB}"), Some("\u{68B4}"), Some("\u{68BB}"), Some("\u{68FB}"), Some("\u{234E4}"), Some("\u{2355A}"),
            Some("\u{FA13}"), Some("\u{68C3}"), Some("\u{68C5}"), Some("\u{68CC}"), Some("\u{68CF}"), Some("\u{68D6}"),
        ],
        // 2-15
        [
            Some("\u{68D9}"), Some("\u{68E4}"), Some("\u{68E5}"), Some("\u{68EC}"), Some("\u{68F7}"), Some("\u{6903}"), Some("\u{6907}"), Some("\u{3B87}"),
            Some("\u{3B88}"), Some("\u{23594}"), Some("\u{693B}"), Some("\u{3B8D}"), Some("\u{6946}"), Some("\u{6969}"), Some("\u{696C}"), Some("\u{6972}"),
            Some("\u{697A}"), Some("\u{697F}"), Some("\u{6992}"), Some("\u{3BA4}"), Some("\u{6996}"), Some("\u{6998}"), Some("\u{69A6}"), Some("\u{69B0}"),
            Some("\u{69B7}"), Some("\u{69BA}"), Some("\u{69BC}"), Some("\u{69C0}"), Some("\u{69D1}"), Some("\u{69D6}"), Some("\u{23639}"), Some("\u{23647}"),
            Some("\u{6A30}"), Some("\u{23638}"), Some("\u{2363A}"), Some("\u{69E3}"), Some("\u{69EE}"), Some("\u{69EF}"), Some("\u{69F3}"), Some("\u{3BCD}"),
            Some("\u{69F4}"), Some("\u{69FE}"), Some("\u{6A11}"), Some("\u{6A1A}"), Some("\u{6A1D}"), Some("\u{2371C}"), Some("\u{6A32}"), Some("\u{6A33}"),
            Some("\u{6A34}"), Some("\u{6A3F}"), Some("\u{6A46}"), Some("\u{6A49}"), Some("\u{6A7A}"), Some("\u{6A4E}"), Some("\u{6A52}"), Some("\u{6A64}"),
            Some("\u{2370C}"), Some("\u{6A7E}"), Some("\u{6A83}"), Some("\u{6A8B}"), Some("\u{3BF0}"), Some("\u{6A91}"), Some("\u{6A9F}"), Some("\u{6AA1}"),
            Some("\u{23764}"), Some("\u{6AAB}"), Some("\u{6ABD}"), Some("\u{6AC6}"), Some("\u{6AD4}"), Some("\u{6AD0}"), Some("\u{6ADC}"), Some("\u{6ADD}"),
            Some("\u{237FF}"), Some("\u{237E7}"), Some("\u{6AEC}"), Some("\u{6AF1}"), Some("\u{6AF2}"), Some("\u{6AF3}"), Some("\u{6AFD}"), Some("\u{23824}"),
            Some("\u{6B0B}"), Some("\u{6B0F}"), Some("\u{6B10}"), Some("\u{6B11}"), Some("\u{2383D}"), Some("\u{6B17}"), Some("\u{3C26}"), Some("\u{6B2F}"),
            Some("\u{6B4A}"), Some("\u{6B58}"), Some("\u{6B6C}"), Some("\u{6B75}"), Some("\u{6B7A}"), Some("\u{6B81}"),
        ],
        // 2-16
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-17
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-18
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-19
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-20
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-21
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-22
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-23
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-24
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-25
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-26
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-27
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-28
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-29
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-30
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-31
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-32
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-33
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-34
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-35
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-36
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-37
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-38
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-39
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-40
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-41
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-42
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-43
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-44
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-45
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-46
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-47
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-48
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-49
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-50
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-51
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-52
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-53
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-54
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-55
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-56
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-57
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-58
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-59
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-60
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-61
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-62
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-63
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-64
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-65
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-66
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-67
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-68
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-69
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-70
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-71
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-72
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-73
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-74
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-75
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-76
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-77
        [
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None, None, None,
            None, None, None, None, None, None,
        ],
        // 2-78
        [
            Some("\u{6B9B}"), Some("\u{6BAE}"), Some("\u{23A98}"), Some("\u{6BBD}"), Some("\u{6BBE}"), Some("\u{6BC7}"), Some("\u{6BC8}"), Some("\u{6BC9}"),
            Some("\u{6BDA}"), Some("\u{6BE6}"), Some("\u{6BE7}"), Some("\u{6BEE}"), Some("\u{6BF1}"), Some("\u{6C02}"), Some("\u{6C0A}"), Some("\u{6C0E}"),
            Some("\u{6C35}"), Some("\u{6C36}"), Some("\u{6C3A}"), Some("\u{23C7F}"), Some("\u{6C3F}"), Some("\u{6C4D}"), Some("\u{6C5B}"), Some("\u{6C6D}"),
            Some("\u{6C84}"), Some("\u{6C89}"), Some("\u{3CC3}"), Some("\u{6C94}"), Some("\u{6C95}"), Some("\u{6C97}"), Some("\u{6CAD}"), Some("\u{6CC2}"),
            Some("\u{6CD0}"), Some("\u{3CD2}"), Some("\u{6CD6}"), Some("\u{6CDA}"), Some("\u{6CDC}"), Some("\u{6CE9}"), Some("\u{6CEC}"), Some("\u{6CED}"),
            Some("\u{23D00}"), Some("\u{6D00}"), Some("\u{6D0A}"), Some("\u{6D24}"), Some("\u{6D26}"), Some("\u{6D27}"), Some("\u{6C67}"), Some("\u{6D2F}"),
            Some("\u{6D3C}"), Some("\u{6D5B}"), Some("\u{6D5E}"), Some("\u{6D60}"), Some("\u{6D70}"), Some("\u{6D80}"), Some("\u{6D81}"), Some("\u{6D8A}"),
            Some("\u{6D8D}"), Some("\u{6D91}"), Some("\u{6D98}"), Some("\u{23D40}"), Some("\u{6E17}"), Some("\u{23DFA}"), Some("\u{23DF9}"), Some("\u{23DD3}"),
            Some("\u{6DAB}"), Some("\u{6DAE}"), Some("\u{6DB4}"), Some("\u{6DC2}"), Some("\u{6D34}"), Some("\u{6DC8}"), Some("\u{6DCE}"), Some("\u{6DCF}"),
            Some("\u{6DD0}"), Some("\u{6DDF}"), Some("\u{6DE9}"), Some("\u{6DF6}"), Some("\u{6E36}"), Some("\u{6E1E}"), Some("\u{6E22}"), Some("\u{6E27}"),
            Some("\u{3D11}"), Some("\u{6E32}"), Some("\u{6E3C}"), Some("\u{6E48}"), Some("\u{6E49}"), Some("\u{6E4B}"), Some("\u{6E4C}"), Some("\u{6E4F}"),
            Some("\u{6E51}"), Some("\u{6E53}"), Some("\u{6E54}"), Some("\u{6E57}"), Some("\u{6E63}"), Some("\u{3D1E}"),
        ],
        // 2-79
        [
            Some("\u{6E93}"), Some("\u{6EA7}"), Some("\u{6EB4}"), Some("\u{6EBF}"), Some("\u{6EC3}"), Some("\u{6ECA}"), Some("\u{6ED9}"), Some("\u{6F35}"),
            Some("\u{6EEB}"), Some("\u{6EF9}"), Some("\u{6EFB}"), Some("\u{6F0A}"), Some("\u{6F0C}"), Some("\u{6F18}"), Some("\u{6F25}"), Some("\u{6F36}"),
            Some("\u{6F3C}"), Some("\u{23F7E}"), Some("\u{6F52}"), Some("\u{6F57}"), Some("\u{6F5A}"), Some("\u{6F60}"), Some("\u{6F68}"), Some("\u{6F98}"),
            Some("\u{6F7D}"), Some("\u{6F90}"), Some("\u{6F96}"), Some("\u{6FBE}"), Some("\u{6F9F}"), Some("\u{6FA5}"), Some("\u{6FAF}"), Some("\u{3D64}"),
            Some("\u{6FB5}"), Some("\u{6FC8}"), Some("\u{6FC9}"), Some("\u{6FDA}"), Some("\u{6FDE}"), Some("\u{6FE9}"), Some("\u{24096}"), Some("\u{6FFC}"),
            Some("\u{7000}"), Some("\u{7007}"), Some("\u{700A}"), Some("\u{7023}"), Some("\u{24103}"), Some("\u{7039}"), Some("\u{703A}"), Some("\u{703C}"),
            Some("\u{7043}"), Some("\u{7047}"), Some("\u{704B}"), Some("\u{3D9A}"), Some("\u{7054}"), Some("\u{7065}"), Some("\u{7069}"), Some("\u{706C}"),
            Some("\u{706E}"), Some("\u{7076}"), Some("\u{707E}"), Some("\u{7081}"), Some("\u{7086}"), Some("\u{7095}"), Some("\u{7097}"), Some("\u{70BB}"),
            Some("\u{241C6}"), Some("\u{709F}"), Some("\u{70B1}"), Some("\u{241FE}"), Some("\u{70EC}"), Some("\u{70CA}"), Some("\u{70D1}"), Some("\u{70D3}"),
            Some("\u{70DC}"), Some("\u{7103}"), Some("\u{7104}"), Some("\u{7106}"), Some("\u{7107}"), Some("\u{7108}"), Some("\u{710C}"), Some("\u{3DC0}"),
            Some("\u{712F}"), Some("\u{7131}"), Some("\u{7150}"), Some("\u{714A}"), Some("\u{7153}"), Some("\u{715E}"), Some("\u{3DD4}"), Some("\u{7196}"),
            Some("\u{7180}"), Some("\u{719B}"), Some("\u{71A0}"), Some("\u{71A2}"), Some("\u{71AE}"), Some("\u{71AF}"),
        ],
        // 2-80
        [
            Some("\u{71B3}"), Some("\u{243BC}"), Some("\u{71CB}"), Some("\u{71D3}"), Some("\u{71D9}"), Some("\u{71DC}"), Some("\u{7207}"), Some("\u{3E05}"),
            Some("\u{FA49}"), Some("\u{722B}"), Some("\u{7234}"), Some("\u{7238}"), Some("\u{7239}"), Some("\u{4E2C}"), Some("\u{7242}"), Some("\u{7253}"),
            Some("\u{7257}"), Some("\u{7263}"), Some("\u{24629}"), Some("\u{726E}"), Some("\u{726F}"), Some("\u{7278}"), Some("\u{727F}"), Some("\u{728E}"),
            Some("\u{246A5}"), Some("\u{72AD}"), Some("\u{72AE}"), Some("\u{72B0}"), Some("\u{72B1}"), Some("\u{72C1}"), Some("\u{3E60}"), Some("\u{72CC}"),
            Some("\u{3E66}"), Some("\u{3E68}"), Some("\u{72F3}"), Some("\u{72FA}"), Some("\u{7307}"), Some("\u{7312}"), Some("\u{7318}"), Some("\u{7319}"),
            Some("\u{3E83}"), Some("\u{7339}"), Some("\u{732C}"), Some("\u{7331}"), Some("\u{7333}"), Some("\u{733D}"), Some("\u{7352}"), Some("\u{3E94}"),
            Some("\u{736B}"), Some("\u{736C}"), Some("\u{24896}"), Some("\u{736E}"), Some("\u{736F}"), Some("\u{7371}"), Some("\u{7377}"), Some("\u{7381}"),
            Some("\u{7385}"), Some("\u{738A}"), Some("\u{7394}"), Some("\u{7398}"), Some("\u{739C}"), Some("\u{739E}"), Some("\u{73A5}"), Some("\u{73A8}"),
            Some("\u{73B5}"), Some("\u{73B7}"), Some("\u{73B9}"), Some("\u{73BC}"), Some("\u{73BF}"), Some("\u{73C5}"), Some("\u{73CB}"), Some("\u{73E1}"),
            Some("\u{73E7}"), Some("\u{73F9}"), Some("\u{7413}"), Some("\u{73FA}"), Some("\u{7401}"), Some("\u{7424}"), Some("\u{7431}"), Some("\u{7439}"),
            Some("\u{7453}"), Some("\u{7440}"), Some("\u{7443}"), Some("\u{744D}"), Some("\u{7452}"), Some("\u{745D}"), Some("\u{7471}"), Some("\u{7481}"),
            Some("\u{7485}"), Some("\u{7488}"), Some("\u{24A4D}"), Some("\u{7492}"), Some("\u{7497}"), Some("\u{7499}"),
        ],
        // 2-81
        [
            Some("\u{74A0}"), Some("\u{74A1}"), Some("\u{74A5}"), Some("\u{74AA}"), Some("\u{74AB}"), Some("\u{74B9}"), Some("\u{74BB}"), Some("\u{74BA}"),
            Some("\u{74D6}"), Some("\u{74D8}"), Some("\u{74DE}"), Some("\u{74EF}"), Some("\u{74EB}"), Some("\u{24B56}"), Some("\u{74FA}"), Some("\u{24B6F}"),
            Some("\u{7520}"), Some("\u{7524}"), Some("\u{752A}"), Some("\u{3F57}"), Some("\u{24C16}"), Some("\u{753D}"), Some("\u{753E}"), Some("\u{7540}"),
            Some("\u{7548}"), Some("\u{754E}"), Some("\u{7550}"), Some("\u{7552}"), Some("\u{756C}"), Some("\u{7572}"), Some("\u{7571}"), Some("\u{757A}"),
            Some("\u{757D}"), Some("\u{757E}"), Some("\u{7581}"), Some("\u{24D14}"), Some("\u{758C}"), Some("\u{3F75}"), Some("\u{75A2}"), Some("\u{3F77}"),
            Some("\u{75B0}"), Some("\u{75B7}"), Some("\u{75BF}"), Some("\u{75C0}"), Some("\u{75C6}"), Some("\u{75CF}"), Some("\u{75D3}"), Some("\u{75DD}"),
            Some("\u{75DF}"), Some("\u{75E0}"), Some("\u{75E7}"), Some("\u{75EC}"), Some("\u{75EE}"), Some("\u{75F1}"), Some("\u{75F9}"), Some("\u{7603}"),
            Some("\u{7618}"), Some("\u{7607}"), Some("\u{760F}"), Some("\u{3FAE}"), Some("\u{24E0E}"), Some("\u{7613}"), Some("\u{761B}"), Some("\u{761C}"),
            Some("\u{24E37}"), Some("\u{7625}"), Some("\u{7628}"), Some("\u{763C}"), Some("\u{7633}"), Some("\u{24E6A}"), Some("\u{3FC9}"), Some("\u{7641}"),
            Some("\u{24E8B}"), Some("\u{7649}"), Some("\u{7655}"), Some("\u{3FD7}"), Some("\u{766E}"), Some("\u{7695}"), Some("\u{769C}"), Some("\u{76A1}"),
            Some("\u{76A0}"), Some("\u{76A7}"), Some("\u{76A8}"), Some("\u{76AF}"), Some("\u{2504A}"), Some("\u{76C9}"), Some("\u{25055}"), Some("\u{76E8}"),
            Some("\u{76EC}"), Some("\u{25122}"), Some("\u{7717}"), Some("\u{771A}"), Some("\u{772D}"), Some("\u{7735}"),
        ],
        // 2-82
        [
            Some("\u{251A9}"), Some("\u{4039}"), Some("\u{251E5}"), Some("\u{251CD}"), Some("\u{7758}"), Some("\u{7760}"), Some("\u{776A}"), Some("\u{2521E}"),
            Some("\u{7772}"), Some("\u{777C}"), Some("\u{777D}"), Some("\u{2524C}"), Some("\u{4058}"), Some("\u{779A}"), Some("\u{779F}"), Some("\u{77A2}"),
            Some("\u{77A4}"), Some("\u{77A9}"), Some("\u{77DE}"), Some("\u{77DF}"), Some("\u{77E4}"), Some("\u{77E6}"), Some("\u{77EA}"), Some("\u{77EC}"),
            Some("\u{4093}"), Some("\u{77F0}"), Some("\u{77F4}"), Some("\u{77FB}"), Some("\u{2542E}"), Some("\u{7805}"), Some("\u{7806}"), Some("\u{7809}"),
            Some("\u{780D}"), Some("\u{7819}"), Some("\u{7821}"), Some("\u{782C}"), Some("\u{7847}"), Some("\u{7864}"), Some("\u{786A}"), Some("\u{254D9}"),
            Some("\u{788A}"), Some("\u{7894}"), Some("\u{78A4}"), Some("\u{789D}"), Some("\u{789E}"), Some("\u{789F}"), Some("\u{78BB}"), Some("\u{78C8}"),
            Some("\u{78CC}"), Some("\u{78CE}"), Some("\u{78D5}"), Some("\u{78E0}"), Some("\u{78E1}"), Some("\u{78E6}"), Some("\u{78F9}"), Some("\u{78FA}"),
            Some("\u{78FB}"), Some("\u{78FE}"), Some("\u{255A7}"), Some("\u{7910}"), Some("\u{791B}"), Some("\u{7930}"), Some("\u{7925}"), Some("\u{793B}"),
            Some("\u{794A}"), Some("\u{7958}"), Some("\u{795B}"), Some("\u{4105}"), Some("\u{7967}"), Some("\u{7972}"), Some("\u{7994}"), Some("\u{7995}"),
            Some("\u{7996}"), Some("\u{799B}"), Some("\u{79A1}"), Some("\u{79A9}"), Some("\u{79B4}"), Some("\u{79BB}"), Some("\u{79C2}"), Some("\u{79C7}"),
            Some("\u{79CC}"), Some("\u{79CD}"), Some("\u{79D6}"), Some("\u{4148}"), Some("\u{257A9}"), Some("\u{257B4}"), Some("\u{414F}"), Some("\u{7A0A}"),
            Some("\u{7A11}"), Some("\u{7A15}"), Some("\u{7A1B}"), Some("\u{7A1E}"), Some("\u{4163}"), Some("\u{7A2D}"),
        ],
        // 2-83
        [
            Some("\u{7A38}"), Some("\u{7A47}"), Some("\u{7A4C}"), Some("\u{7A56}"), Some("\u{7A59}"), Some("\u{7A5C}"), Some("\u{7A5F}"), Some("\u{7A60}"),
            Some("\u{7A67}"), Some("\u{7A6A}"), Some("\u{7A75}"), Some("\u{7A78}"), Some("\u{7A82}"), Some("\u{7A8A}"), Some("\u{7A90}"), Some("\u{7AA3}"),
            Some("\u{7AAC}"), Some("\u{259D4}"), Some("\u{41B4}"), Some("\u{7AB9}"), Some("\u{7ABC}"), Some("\u{7ABE}"), Some("\u{41BF}"), Some("\u{7ACC}"),
            Some("\u{7AD1}"), Some("\u{7AE7}"), Some("\u{7AE8}"), Some("\u{7AF4}"), Some("\u{25AE4}"), Some("\u{25AE3}"), Some("\u{7B07}"), Some("\u{25AF1}"),
            Some("\u{7B3D}"), Some("\u{7B27}"), Some("\u{7B2A}"), Some("\u{7B2E}"), Some("\u{7B2F}"), Some("\u{7B31}"), Some("\u{41E6}"), Some("\u{41F3}"),
            Some("\u{7B7F}"), Some("\u{7B41}"), Some("\u{41EE}"), Some("\u{7B55}"), Some("\u{7B79}"), Some("\u{7B64}"), Some("\u{7B66}"), Some("\u{7B69}"),
            Some("\u{7B73}"), Some("\u{25BB2}"), Some("\u{4207}"), Some("\u{7B90}"), Some("\u{7B91}"), Some("\u{7B9B}"), Some("\u{420E}"), Some("\u{7BAF}"),
            Some("\u{7BB5}"), Some("\u{7BBC}"), Some("\u{7BC5}"), Some("\u{7BCA}"), Some("\u{25C4B}"), Some("\u{25C64}"), Some("\u{7BD4}"), Some("\u{7BD6}"),
            Some("\u{7BDA}"), Some("\u{7BEA}"), Some("\u{7BF0}"), Some("\u{7C03}"), Some("\u{7C0B}"), Some("\u{7C0E}"), Some("\u{7C0F}"), Some("\u{7C26}"),
            Some("\u{7C45}"), Some("\u{7C4A}"), Some("\u{7C51}"), Some("\u{7C57}"), Some("\u{7C5E}"), Some("\u{7C61}"), Some("\u{7C69}"), Some("\u{7C6E}"),
            Some("\u{7C6F}"), Some("\u{7C70}"), Some("\u{25E2E}"), Some("\u{25E56}"), Some("\u{25E65}"), Some("\u{7CA6}"), Some("\u{25E62}"), Some("\u{7CB6}"),
            Some("\u{7CB7}"), Some("\u{7CBF}"), Some("\u{25ED8}"), Some("\u{7CC4}"), Some("\u{25EC2}"), Some("\u{7CC8}"),
        ],
        // 2-84
        [
            Some("\u{7CCD}"), Some("\u{25EE8}"), Some("\u{7CD7}"), Some("\u{25F23}"), Some("\u{7CE6}"), Some("\u{7CEB}"), Some("\u{25F5C}"), Some("\u{7CF5}"),
            Some("\u{7D03}"), Some("\u{7D09}"), Some("\u{42C6}"), Some("\u{7D12}"), Some("\u{7D1E}"), Some("\u{25FE0}"), Some("\u{25FD4}"), Some("\u{7D3D}"),
            Some("\u{7D3E}"), Some("\u{7D40}"), Some("\u{7D47}"), Some("\u{2600C}"), Some("\u{25FFB}"), Some("\u{42D6}"), Some("\u{7D59}"), Some("\u{7D5A}"),
            Some("\u{7D6A}"), Some("\u{7D70}"), Some("\u{42DD}"), Some("\u{7D7F}"), Some("\u{26017}"), Some("\u{7D86}"), Some("\u{7D88}"), Some("\u{7D8C}"),
            Some("\u{7D97}"), Some("\u{26060}"), Some("\u{7D9D}"), Some("\u{7DA7}"), Some("\u{7DAA}"), Some("\u{7DB6}"), Some("\u{7DB7}"), Some("\u{7DC0}"),
            Some("\u{7DD7}"), Some("\u{7DD9}"), Some("\u{7DE6}"), Some("\u{7DF1}"), Some("\u{7DF9}"), Some("\u{4302}"), Some("\u{260ED}"), Some("\u{FA58}"),
            Some("\u{7E10}"), Some("\u{7E17}"), Some("\u{7E1D}"), Some("\u{7E20}"), Some("\u{7E27}"), Some("\u{7E2C}"), Some("\u{7E45}"), Some("\u{7E73}"),
            Some("\u{7E75}"), Some("\u{7E7E}"), Some("\u{7E86}"), Some("\u{7E87}"), Some("\u{432B}"), Some("\u{7E91}"), Some("\u{7E98}"), Some("\u{7E9A}"),
            Some("\u{4343}"), Some("\u{7F3C}"), Some("\u{7F3B}"), Some("\u{7F3E}"), Some("\u{7F43}"), Some("\u{7F44}"), Some("\u{7F4F}"), Some("\u{34C1}"),
            Some("\u{26270}"), Some("\u{7F52}"), Some("\u{26286}"), Some("\u{7F61}"), Some("\u{7F63}"), Some("\u{7F64}"), Some("\u{7F6D}"), Some("\u{7F7D}"),
            Some("\u{7F7E}"), Some("\u{2634C}"), Some("\u{7F90}"), Some("\u{517B}"), Some("\u{23D0E}"), Some("\u{7F96}"), Some("\u{7F9C}"), Some("\u{7FAD}"),
            Some("\u{26402}"), Some("\u{7FC3}"), Some("\u{7FCF}"), Some("\u{7FE3}"), Some("\u{7FE5}"), Some("\u{7FEF}"),
        ],
        // 2-85
        [
            Some("\u{7FF2}"), Some("\u{8002}"), Some("\u{800A}"), Some("\u{8008}"), Some("\u{800E}"), Some("\u{8011}"), Some("\u{8016}"), Some("\u{8024}"),
            Some("\u{802C}"), Some("\u{8030}"), Some("\u{8043}"), Some("\u{8066}"), Some("\u{8071}"), Some("\u{8075}"), Some("\u{807B}"), Some("\u{8099}"),
            Some("\u{809C}"), Some("\u{80A4}"), Some("\u{80A7}"), Some("\u{80B8}"), Some("\u{2667E}"), Some("\u{80C5}"), Some("\u{80D5}"), Some("\u{80D8}"),
            Some("\u{80E6}"), Some("\u{266B0}"), Some("\u{810D}"), Some("\u{80F5}"), Some("\u{80FB}"), Some("\u{43EE}"), Some("\u{8135}"), Some("\u{8116}"),
            Some("\u{811E}"), Some("\u{43F0}"), Some("\u{8124}"), Some("\u{8127}"), Some("\u{812C}"), Some("\u{2671D}"), Some("\u{813D}"), Some("\u{4408}"),
            Some("\u{8169}"), Some("\u{4417}"), Some("\u{8181}"), Some("\u{441C}"), Some("\u{8184}"), Some("\u{8185}"), Some("\u{4422}"), Some("\u{8198}"),
            Some("\u{81B2}"), Some("\u{81C1}"), Some("\u{81C3}"), Some("\u{81D6}"), Some("\u{81DB}"), Some("\u{268DD}"), Some("\u{81E4}"), Some("\u{268EA}"),
            Some("\u{81EC}"), Some("\u{26951}"), Some("\u{81FD}"), Some("\u{81FF}"), Some("\u{2696F}"), Some("\u{8204}"), Some("\u{269DD}"), Some("\u{8219}"),
            Some("\u{8221}"), Some("\u{8222}"), Some("\u{26A1E}"), Some("\u{8232}"), Some("\u{8234}"), Some("\u{823C}"), Some("\u{8246}"), Some("\u{8249}"),
            Some("\u{8245}"), Some("\u{26A58}"), Some("\u{824B}"), Some("\u{4476}"), Some("\u{824F}"), Some("\u{447A}"), Some("\u{8257}"), Some("\u{26A8C}"),
            Some("\u{825C}"), Some("\u{8263}"), Some("\u{26AB7}"), Some("\u{FA5D}"), Some("\u{FA5E}"), Some("\u{8279}"), Some("\u{4491}"), Some("\u{827D}"),
            Some("\u{827F}"), Some("\u{8283}"), Some("\u{828A}"), Some("\u{8293}"), Some("\u{82A7}"), Some("\u{82A8}"),
        ],
        // 2-86
        [
            Some("\u{82B2}"), Some("\u{82B4}"), Some("\u{82BA}"), Some("\u{82BC}"), Some("\u{82E2}"), Some("\u{82E8}"), Some("\u{82F7}"), Some("\u{8307}"),
            Some("\u{8308}"), Some("\u{830C}"), Some("\u{8354}"), Some("\u{831B}"), Some("\u{831D}"), Some("\u{8330}"), Some("\u{833C}"), Some("\u{8344}"),
            Some("\u{8357}"), Some("\u{44BE}"), Some("\u{837F}"), Some("\u{44D4}"), Some("\u{44B3}"), Some("\u{838D}"), Some("\u{8394}"), Some("\u{8395}"),
            Some("\u{839B}"), Some("\u{839D}"), Some("\u{83C9}"), Some("\u{83D0}"), Some("\u{83D4}"), Some("\u{83DD}"), Some("\u{83E5}"), Some("\u{83F9}"),
            Some("\u{840F}"), Some("\u{8411}"), Some("\u{8415}"), Some("\u{26C73}"), Some("\u{8417}"), Some("\u{8439}"), Some("\u{844A}"), Some("\u{844F}"),
            Some("\u{8451}"), Some("\u{8452}"), Some("\u{8459}"), Some("\u{845A}"), Some("\u{845C}"), Some("\u{26CDD}"), Some("\u{8465}"), Some("\u{8476}"),
            Some("\u{8478}"), Some("\u{847C}"), Some("\u{8481}"), Some("\u{450D}"), Some("\u{84DC}"), Some("\u{8497}"), Some("\u{84A6}"), Some("\u{84BE}"),
            Some("\u{4508}"), Some("\u{84CE}"), Some("\u{84CF}"), Some("\u{84D3}"), Some("\u{26E65}"), Some("\u{84E7}"), Some("\u{84EA}"), Some("\u{84EF}"),
            Some("\u{84F0}"), Some("\u{84F1}"), Some("\u{84FA}"), Some("\u{84FD}"), Some("\u{850C}"), Some("\u{851B}"), Some("\u{8524}"), Some("\u{8525}"),
            Some("\u{852B}"), Some("\u{8534}"), Some("\u{854F}"), Some("\u{856F}"), Some("\u{4525}"), Some("\u{4543}"), Some("\u{853E}"), Some("\u{8551}"),
            Some("\u{8553}"), Some("\u{855E}"), Some("\u{8561}"), Some("\u{8562}"), Some("\u{26F94}"), Some("\u{857B}"), Some("\u{857D}"), Some("\u{857F}"),
            Some("\u{8581}"), Some("\u{8586}"), Some("\u{8593}"), Some("\u{859D}"), Some("\u{859F}"), Some("\u{26FF8}"),
        ],
        // 2-87
        [
            Some("\u{26FF6}"), Some("\u{26FF7}"), Some("\u{85B7}"), Some("\u{85BC}"), Some("\u{85C7}"), Some("\u{85CA}"), Some("\u{85D8}"), Some("\u{85D9}"),
            Some("\u{85DF}"), Some("\u{85E1}"), Some("\u{85E6}"), Some("\u{85F6}"), Some("\u{8600}"), Some("\u{8611}"), Some("\u{861E}"), Some("\u{8621}"),
            Some("\u{8624}"), Some("\u{8627}"), Some("\u{2710D}"), Some("\u{8639}"), Some("\u{863C}"), Some("\u{27139}"), Some("\u{8640}"), Some("\u{FA20}"),
            Some("\u{8653}"), Some("\u{8656}"), Some("\u{866F}"), Some("\u{8677}"), Some("\u{867A}"), Some("\u{8687}"), Some("\u{8689}"), Some("\u{868D}"),
            Some("\u{8691}"), Some("\u{869C}"), Some("\u{869D}"), Some("\u{86A8}"), Some("\u{FA21}"), Some("\u{86B1}"), Some("\u{86B3}"), Some("\u{86C1}"),
            Some("\u{86C3}"), Some("\u{86D1}"), Some("\u{86D5}"), Some("\u{86D7}"), Some("\u{86E3}"), Some("\u{86E6}"), Some("\u{45B8}"), Some("\u{8705}"),
            Some("\u{8707}"), Some("\u{870E}"), Some("\u{8710}"), Some("\u{8713}"), Some("\u{8719}"), Some("\u{871F}"), Some("\u{8721}"), Some("\u{8723}"),
            Some("\u{8731}"), Some("\u{873A}"), Some("\u{873E}"), Some("\u{8740}"), Some("\u{8743}"), Some("\u{8751}"), Some("\u{8758}"), Some("\u{8764}"),
            Some("\u{8765}"), Some("\u{8772}"), Some("\u{877C}"), Some("\u{273DB}"), Some("\u{273DA}"), Some("\u{87A7}"), Some("\u{8789}"), Some("\u{878B}"),
            Some("\u{8793}"), Some("\u{87A0}"), Some("\u{273FE}"), Some("\u{45E5}"), Some("\u{87BE}"), Some("\u{27410}"), Some("\u{87C1}"), Some("\u{87CE}"),
            Some("\u{87F5}"), Some("\u{87DF}"), Some("\u{27449}"), Some("\u{87E3}"), Some("\u{87E5}"), Some("\u{87E6}"), Some("\u{87EA}"), Some("\u{87EB}"),
            Some("\u{87ED}"), Some("\u{8801}"), Some("\u{8803}"), Some("\u{880B}"), Some("\u{8813}"), Some("\u{8828}"),
        ],
        // 2-88
        [
            Some("\u{882E}"), Some("\u{8832}"), Some("\u{883C}"), Some("\u{460F}"), Some("\u{884A}"), Some("\u{8858}"), Some("\u{885F}"), Some("\u{8864}"),
            Some("\u{27615}"), Some("\u{27614}"), Some("\u{8869}"), Some("\u{27631}"), Some("\u{886F}"), Some("\u{88A0}"), Some("\u{88BC}"), Some("\u{88BD}"),
            Some("\u{88BE}"), Some("\u{88C0}"), Some("\u{88D2}"), Some("\u{27693}"), Some("\u{88D1}"), Some("\u{88D3}"), Some("\u{88DB}"), Some("\u{88F0}"),
            Some("\u{88F1}"), Some("\u{4641}"), Some("\u{8901}"), Some("\u{2770E}"), Some("\u{8937}"), Some("\u{27723}"), Some("\u{8942}"), Some("\u{8945}"),
            Some("\u{8949}"), Some("\u{27752}"), Some("\u{4665}"), Some("\u{8962}"), Some("\u{8980}"), Some("\u{8989}"), Some("\u{8990}"), Some("\u{899F}"),
            Some("\u{89B0}"), Some("\u{89B7}"), Some("\u{89D6}"), Some("\u{89D8}"), Some("\u{89EB}"), Some("\u{46A1}"), Some("\u{89F1}"), Some("\u{89F3}"),
            Some("\u{89FD}"), Some("\u{89FF}"), Some("\u{46AF}"), Some("\u{8A11}"), Some("\u{8A14}"), Some("\u{27985}"), Some("\u{8A21}"), Some("\u{8A35}"),
            Some("\u{8A3E}"), Some("\u{8A45}"), Some("\u{8A4D}"), Some("\u{8A58}"), Some("\u{8AAE}"), Some("\u{8A90}"), Some("\u{8AB7}"), Some("\u{8ABE}"),
            Some("\u{8AD7}"), Some("\u{8AFC}"), Some("\u{27A84}"), Some("\u{8B0A}"), Some("\u{8B05}"), Some("\u{8B0D}"), Some("\u{8B1C}"), Some("\u{8B1F}"),
            Some("\u{8B2D}"), Some("\u{8B43}"), Some("\u{470C}"), Some("\u{8B51}"), Some("\u{8B5E}"), Some("\u{8B76}"), Some("\u{8B7F}"), Some("\u{8B81}"),
            Some("\u{8B8B}"), Some("\u{8B94}"), Some("\u{8B95}"), Some("\u{8B9C}"), Some("\u{8B9E}"), Some("\u{8C39}"), Some("\u{27BB3}"), Some("\u{8C3D}"),
            Some("\u{27BBE}"), Some("\u{27BC7}"), Some("\u{8C45}"), Some("\u{8C47}"), Some("\u{8C4F}"), Some("\u{8C54}"),
        ],
        // 2-89
        [
            Some("\u{8C57}"), Some("\u{8C69}"), Some("\u{8C6D}"), Some("\u{8C73}"), Some("\u{27CB8}"), Some("\u{8C93}"), Some("\u{8C92}"), Some("\u{8C99}"),
            Some("\u{4764}"), Some("\u{8C9B}"), Some("\u{8CA4}"), Some("\u{8CD6}"), Some("\u{8CD5}"), Some("\u{8CD9}"), Some("\u{27DA0}"), Some("\u{8CF0}"),
            Some("\u{8CF1}"), Some("\u{27E10}"), Some("\u{8D09}"), Some("\u{8D0E}"), Some("\u{8D6C}"), Some("\u{8D84}"), Some("\u{8D95}"), Some("\u{8DA6}"),
            Some("\u{27FB7}"), Some("\u{8DC6}"), Some("\u{8DC8}"), Some("\u{8DD9}"), Some("\u{8DEC}"), Some("\u{8E0C}"), Some("\u{47FD}"), Some("\u{8DFD}"),
            Some("\u{8E06}"), Some("\u{2808A}"), Some("\u{8E14}"), Some("\u{8E16}"), Some("\u{8E21}"), Some("\u{8E22}"), Some("\u{8E27}"), Some("\u{280BB}"),
            Some("\u{4816}"), Some("\u{8E36}"), Some("\u{8E39}"), Some("\u{8E4B}"), Some("\u{8E54}"), Some("\u{8E62}"), Some("\u{8E6C}"), Some("\u{8E6D}"),
            Some("\u{8E6F}"), Some("\u{8E98}"), Some("\u{8E9E}"), Some("\u{8EAE}"), Some("\u{8EB3}"), Some("\u{8EB5}"), Some("\u{8EB6}"), Some("\u{8EBB}"),
            Some("\u{28282}"), Some("\u{8ED1}"), Some("\u{8ED4}"), Some("\u{484E}"), Some("\u{8EF9}"), Some("\u{282F3}"), Some("\u{8F00}"), Some("\u{8F08}"),
            Some("\u{8F17}"), Some("\u{8F2B}"), Some("\u{8F40}"), Some("\u{8F4A}"), Some("\u{8F58}"), Some("\u{2840C}"), Some("\u{8FA4}"), Some("\u{8FB4}"),
            Some("\u{FA66}"), Some("\u{8FB6}"), Some("\u{28455}"), Some("\u{8FC1}"), Some("\u{8FC6}"), Some("\u{FA24}"), Some("\u{8FCA}"), Some("\u{8FCD}"),
            Some("\u{8FD3}"), Some("\u{8FD5}"), Some("\u{8FE0}"), Some("\u{8FF1}"), Some("\u{8FF5}"), Some("\u{8FFB}"), Some("\u{9002}"), Some("\u{900C}"),
            Some("\u{9037}"), Some("\u{2856B}"), Some("\u{9043}"), Some("\u{9044}"), Some("\u{905D}"), Some("\u{285C8}"),
        ],
        // 2-90
        [
            Some("\u{285C9}"), Some("\u{9085}"), Some("\u{908C}"), Some("\u{9090}"), Some("\u{961D}"), Some("\u{90A1}"), Some("\u{48B5}"), Some("\u{90B0}"),
            Some("\u{90B6}"), Some("\u{90C3}"), Some("\u{90C8}"), Some("\u{286D7}"), Some("\u{90DC}"), Some("\u{90DF}"), Some("\u{286FA}"), Some("\u{90F6}"),
            Some("\u{90F2}"), Some("\u{9100}"), Some("\u{90EB}"), Some("\u{90FE}"), Some("\u{90FF}"), Some("\u{9104}"), Some("\u{9106}"), Some("\u{9118}"),
            Some("\u{911C}"), Some("\u{911E}"), Some("\u{9137}"), Some("\u{9139}"), Some("\u{913A}"), Some("\u{9146}"), Some("\u{9147}"), Some("\u{9157}"),
            Some("\u{9159}"), Some("\u{9161}"), Some("\u{9164}"), Some("\u{9174}"), Some("\u{9179}"), Some("\u{9185}"), Some("\u{918E}"), Some("\u{91A8}"),
            Some("\u{91AE}"), Some("\u{91B3}"), Some("\u{91B6}"), Some("\u{91C3}"), Some("\u{91C4}"), Some("\u{91DA}"), Some("\u{28949}"), Some("\u{28946}"),
            Some("\u{91EC}"), Some("\u{91EE}"), Some("\u{9201}"), Some("\u{920A}"), Some("\u{9216}"), Some("\u{9217}"), Some("\u{2896B}"), Some("\u{9233}"),
            Some("\u{9242}"), Some("\u{9247}"), Some("\u{924A}"), Some("\u{924E}"), Some("\u{9251}"), Some("\u{9256}"), Some("\u{9259}"), Some("\u{9260}"),
            Some("\u{9261}"), Some("\u{9265}"), Some("\u{9267}"), Some("\u{9268}"), Some("\u{28987}"), Some("\u{28988}"), Some("\u{927C}"), Some("\u{927D}"),
            Some("\u{927F}"), Some("\u{9289}"), Some("\u{928D}"), Some("\u{9297}"), Some("\u{9299}"), Some("\u{929F}"), Some("\u{92A7}"), Some("\u{92AB}"),
            Some("\u{289BA}"), Some("\u{289BB}"), Some("\u{92B2}"), Some("\u{92BF}"), Some("\u{92C0}"), Some("\u{92C6}"), Some("\u{92CE}"), Some("\u{92D0}"),
            Some("\u{92D7}"), Some("\u{92D9}"), Some("\u{92E5}"), Some("\u{92E7}"), Some("\u{9311}"), Some("\u{28A1E}"),
        ],
        // 2-91
        [
            Some("\u{28A29}"), Some("\u{92F7}"), Some("\u{92F9}"), Some("\u{92FB}"), Some("\u{9302}"), Some("\u{930D}"), Some("\u{9315}"), Some("\u{931D}"),
            Some("\u{931E}"), Some("\u{9327}"), Some("\u{9329}"), Some("\u{28A71}"), Some("\u{28A43}"), Some("\u{9347}"), Some("\u{9351}"), Some("\u{9357}"),
            Some("\u{935A}"), Some("\u{936B}"), Some("\u{9371}"), Some("\u{9373}"), Some("\u{93A1}"), Some("\u{28A99}"), Some("\u{28ACD}"), Some("\u{9388}"),
            Some("\u{938B}"), Some("\u{938F}"), Some("\u{939E}"), Some("\u{93F5}"), Some("\u{28AE4}"), Some("\u{28ADD}"), Some("\u{93F1}"), Some("\u{93C1}"),
            Some("\u{93C7}"), Some("\u{93DC}"), Some("\u{93E2}"), Some("\u{93E7}"), Some("\u{9409}"), Some("\u{940F}"), Some("\u{9416}"), Some("\u{9417}"),
            Some("\u{93FB}"), Some("\u{9432}"), Some("\u{9434}"), Some("\u{943B}"), Some("\u{9445}"), Some("\u{28BC1}"), Some("\u{28BEF}"), Some("\u{946D}"),
            Some("\u{946F}"), Some("\u{9578}"), Some("\u{9579}"), Some("\u{9586}"), Some("\u{958C}"), Some("\u{958D}"), Some("\u{28D10}"), Some("\u{95AB}"),
            Some("\u{95B4}"), Some("\u{28D71}"), Some("\u{95C8}"), Some("\u{28DFB}"), Some("\u{28E1F}"), Some("\u{962C}"), Some("\u{9633}"), Some("\u{9634}"),
            Some("\u{28E36}"), Some("\u{963C}"), Some("\u{9641}"), Some("\u{9661}"), Some("\u{28E89}"), Some("\u{9682}"), Some("\u{28EEB}"), Some("\u{969A}"),
            Some("\u{28F32}"), Some("\u{49E7}"), Some("\u{96A9}"), Some("\u{96AF}"), Some("\u{96B3}"), Some("\u{96BA}"), Some("\u{96BD}"), Some("\u{49FA}"),
            Some("\u{28FF8}"), Some("\u{96D8}"), Some("\u{96DA}"), Some("\u{96DD}"), Some("\u{4A04}"), Some("\u{9714}"), Some("\u{9723}"), Some("\u{4A29}"),
            Some("\u{9736}"), Some("\u{9741}"), Some("\u{9747}"), Some("\u{9755}"), Some("\u{9757}"), Some("\u{975B}"),
        ],
        // 2-92
        [
            Some("\u{976A}"), Some("\u{292A0}"), Some("\u{292B1}"), Some("\u{9796}"), Some("\u{979A}"), Some("\u{979E}"), Some("\u{97A2}"), Some("\u{97B1}"),
            Some("\u{97B2}"), Some("\u{97BE}"), Some("\u{97CC}"), Some("\u{97D1}"), Some("\u{97D4}"), Some("\u{97D8}"), Some("\u{97D9}"), Some("\u{97E1}"),
            Some("\u{97F1}"), Some("\u{9804}"), Some("\u{980D}"), Some("\u{980E}"), Some("\u{9814}"), Some("\u{9816}"), Some("\u{4ABC}"), Some("\u{29490}"),
            Some("\u{9823}"), Some("\u{9832}"), Some("\u{9833}"), Some("\u{9825}"), Some("\u{9847}"), Some("\u{9866}"), Some("\u{98AB}"), Some("\u{98AD}"),
            Some("\u{98B0}"), Some("\u{295CF}"), Some("\u{98B7}"), Some("\u{98B8}"), Some("\u{98BB}"), Some("\u{98BC}"), Some("\u{98BF}"), Some("\u{98C2}"),
            Some("\u{98C7}"), Some("\u{98CB}"), Some("\u{98E0}"), Some("\u{2967F}"), Some("\u{98E1}"), Some("\u{98E3}"), Some("\u{98E5}"), Some("\u{98EA}"),
            Some("\u{98F0}"), Some("\u{98F1}"), Some("\u{98F3}"), Some("\u{9908}"), Some("\u{4B3B}"), Some("\u{296F0}"), Some("\u{9916}"), Some("\u{9917}"),
            Some("\u{29719}"), Some("\u{991A}"), Some("\u{991B}"), Some("\u{991C}"), Some("\u{29750}"), Some("\u{9931}"), Some("\u{9932}"), Some("\u{9933}"),
            Some("\u{993A}"), Some("\u{993B}"), Some("\u{993C}"), Some("\u{9940}"), Some("\u{9941}"), Some("\u{9946}"), Some("\u{994D}"), Some("\u{994E}"),
            Some("\u{995C}"), Some("\u{995F}"), Some("\u{9960}"), Some("\u{99A3}"), Some("\u{99A6}"), Some("\u{99B9}"), Some("\u{99BD}"), Some("\u{99BF}"),
            Some("\u{99C3}"), Some("\u{99C9}"), Some("\u{99D4}"), Some("\u{99D9}"), Some("\u{99DE}"), Some("\u{298C6}"), Some("\u{99F0}"), Some("\u{99F9}"),
            Some("\u{99FC}"), Some("\u{9A0A}"), Some("\u{9A11}"), Some("\u{9A16}"), Some("\u{9A1A}"), Some("\u{9A20}"),
        ],
        // 2-93
        [
            Some("\u{9A31}"), Some("\u{9A36}"), Some("\u{9A44}"), Some("\u{9A4C}"), Some("\u{9A58}"), Some("\u{4BC2}"), Some("\u{9AAF}"), Some("\u{4BCA}"),
            Some("\u{9AB7}"), Some("\u{4BD2}"), Some("\u{9AB9}"), Some("\u{29A72}"), Some("\u{9AC6}"), Some("\u{9AD0}"), Some("\u{9AD2}"), Some("\u{9AD5}"),
            Some("\u{4BE8}"), Some("\u{9ADC}"), Some("\u{9AE0}"), Some("\u{9AE5}"), Some("\u{9AE9}"), Some("\u{9B03}"), Some("\u{9B0C}"), Some("\u{9B10}"),
            Some("\u{9B12}"), Some("\u{9B16}"), Some("\u{9B1C}"), Some("\u{9B2B}"), Some("\u{9B33}"), Some("\u{9B3D}"), Some("\u{4C20}"), Some("\u{9B4B}"),
            Some("\u{9B63}"), Some("\u{9B65}"), Some("\u{9B6B}"), Some("\u{9B6C}"), Some("\u{9B73}"), Some("\u{9B76}"), Some("\u{9B77}"), Some("\u{9BA6}"),
            Some("\u{9BAC}"), Some("\u{9BB1}"), Some("\u{29DDB}"), Some("\u{29E3D}"), Some("\u{9BB2}"), Some("\u{9BB8}"), Some("\u{9BBE}"), Some("\u{9BC7}"),
            Some("\u{9BF3}"), Some("\u{9BD8}"), Some("\u{9BDD}"), Some("\u{9BE7}"), Some("\u{9BEA}"), Some("\u{9BEB}"), Some("\u{9BEF}"), Some("\u{9BEE}"),
            Some("\u{29E15}"), Some("\u{9BFA}"), Some("\u{29E8A}"), Some("\u{9BF7}"), Some("\u{29E49}"), Some("\u{9C16}"), Some("\u{9C18}"), Some("\u{9C19}"),
            Some("\u{9C1A}"), Some("\u{9C1D}"), Some("\u{9C22}"), Some("\u{9C27}"), Some("\u{9C29}"), Some("\u{9C2A}"), Some("\u{29EC4}"), Some("\u{9C31}"),
            Some("\u{9C36}"), Some("\u{9C37}"), Some("\u{9C45}"), Some("\u{9C5C}"), Some("\u{29EE9}"), Some("\u{9C49}"), Some("\u{9C4A}"), Some("\u{29EDB}"),
            Some("\u{9C54}"), Some("\u{9C58}"), Some("\u{9C5B}"), Some("\u{9C5D}"), Some("\u{9C5F}"), Some("\u{9C69}"), Some("\u{9C6A}"), Some("\u{9C6B}"),
            Some("\u{9C6D}"), Some("\u{9C6E}"), Some("\u{9C70}"), Some("\u{9C72}"), Some("\u{9C75}"), Some("\u{9C7A}"),
        ],
        // 2-94
        [
            Some("\u{9CE6}"), Some("\u{9CF2}"), Some("\u{9D0B}"), Some("\u{9D02}"), Some("\u{29FCE}"), Some("\u{9D11}"), Some("\u{9D17}"), Some("\u{9D18}"),
            Some("\u{2A02F}"), Some("\u{4CC4}"), Some("\u{2A01A}"), Some("\u{9D32}"), Some("\u{4CD1}"), Some("\u{9D42}"), Some("\u{9D4A}"), Some("\u{9D5F}"),
            Some("\u{9D62}"), Some("\u{2A0F9}"), Some("\u{9D69}"), Some("\u{9D6B}"), Some("\u{2A082}"), Some("\u{9D73}"), Some("\u{9D76}"), Some("\u{9D77}"),
            Some("\u{9D7E}"), Some("\u{9D84}"), Some("\u{9D8D}"), Some("\u{9D99}"), Some("\u{9DA1}"), Some("\u{9DBF}"), Some("\u{9DB5}"), Some("\u{9DB9}"),
            Some("\u{9DBD}"), Some("\u{9DC3}"), Some("\u{9DC7}"), Some("\u{9DC9}"), Some("\u{9DD6}"), Some("\u{9DDA}"), Some("\u{9DDF}"), Some("\u{9DE0}"),
            Some("\u{9DE3}"), Some("\u{9DF4}"), Some("\u{4D07}"), Some("\u{9E0A}"), Some("\u{9E02}"), Some("\u{9E0D}"), Some("\u{9E19}"), Some("\u{9E1C}"),
            Some("\u{9E1D}"), Some("\u{9E7B}"), Some("\u{22218}"), Some("\u{9E80}"), Some("\u{9E85}"), Some("\u{9E9B}"), Some("\u{9EA8}"), Some("\u{2A38C}"),
            Some("\u{9EBD}"), Some("\u{2A437}"), Some("\u{9EDF}"), Some("\u{9EE7}"), Some("\u{9EEE}"), Some("\u{9EFF}"), Some("\u{9F02}"), Some("\u{4D77}"),
            Some("\u{9F03}"), Some("\u{9F17}"), Some("\u{9F19}"), Some("\u{9F2F}"), Some("\u{9F37}"), Some("\u{9F3A}"), Some("\u{9F3D}"), Some("\u{9F41}"),
            Some("\u{9F45}"), Some("\u{9F46}"), Some("\u{9F53}"), Some("\u{9F55}"), Some("\u{9F58}"), Some("\u{2A5F1}"), Some("\u{9F5D}"), Some("\u{2A602}"),
            Some("\u{9F69}"), Some("\u{2A61A}"), Some("\u{9F6D}"), Some("\u{9F70}"), Some("\u{9F75}"), Some("\u{2A6B2}"), None, None,
            None, None, None, None, None, None,
        ],
    ],
];

// Encoding tables from Unicode to packed coordinates, sorted by decreasing
// length. Values are `plane << 14 | row << 7 | cell`; zero marks a scalar
// with no assignment.
// ENCODE0: 42664 entries for scalars in [0x2000b, 0x2a6b3).
// ENCODE1: 28579 entries for scalars in [0x3000, 0x9fa3).
// ENCODE2:  3006 entries for scalars in [0x1e3e, 0x29fc).
// ENCODE3:  1602 entries for scalars in [0xf91d, 0xff5f).
// ENCODE4:   946 entries for scalars in [0xa0, 0x452).
pub(crate) static ENCODE_TABLES: [EncodeTable; 5] = [
    EncodeTable { low: 0x2000b, high: 0x2a6b3, values: &ENCODE0 },
    EncodeTable { low: 0x3000, high: 0x9fa3, values: &ENCODE1 },
    EncodeTable { low: 0x1e3e, high: 0x29fc, values: &ENCODE2 },
    EncodeTable { low: 0xf91d, high: 0xff5f, values: &ENCODE3 },
    EncodeTable { low: 0xa0, high: 0x452, values: &ENCODE4 },
];

static ENCODE0: [u16; 42664] = [
    0x4702, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8081, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0x808b, 0, 0x808e, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0x8096, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0x80a6, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0x80d0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0x80d9, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0x80d7, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8182, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8185,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8187, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8191, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8192, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0x8198, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x819f, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x81a1,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x81aa, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0x81b2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x81b3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0x81b9, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x81bc, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0x57b4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x81d7, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0x820a, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0x821a, 0, 0, 0, 0, 0, 0,
    0, 0, 0x8212, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8211, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0x821d, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0x8239, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x47a2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x823c, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8243, 0, 0, 0, 0, 0, 0,
    0x823e, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x824b, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0x824a, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x8252, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0x47ac, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8254, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8255, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8285, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x8292, 0x47c0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x829e, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x82a7, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0x57c3, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x82b5, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0x82b6, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x47db, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0x82de, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8410, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x8417, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8418, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0x841b, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x841a, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0x8425, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0x8420, 0, 0, 0, 0, 0x841f, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8428, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0x842a, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0x842b, 0x57ce, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0x843b, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8446, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x844c,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0x8602, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xaf33, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0x860b, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x8610, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0x8630, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0x8645, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0x864d, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0x8652, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8684, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8692, 0, 0, 0, 0,
    0, 0, 0, 0, 0x8689, 0x868a, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8695, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x8694, 0, 0, 0, 0, 0, 0, 0x8699, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0x86b6, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8704, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0x86dd, 0x6a9a, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8703, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0x871a, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0x8722, 0, 0x871d, 0x871c, 0, 0x8724, 0, 0, 0, 0, 0x8727,
    0, 0, 0, 0, 0x8729, 0, 0, 0, 0, 0x8723, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8735,
    0x8737, 0, 0, 0, 0, 0, 0x8736, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x873b, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8757, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8758,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0x878a, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0x6ad2, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x87a2, 0x879f, 0x87a3,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x87a0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0x87b9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0x87ae, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0x6b09, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0x6b12, 0x87c1, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x87ca, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0x87c9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0x87d0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x87d5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa703, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0xa714, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0x6b40, 0, 0xa729, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0xaa55, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0xa73c, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0xa740, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa73f, 0xa73e,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0xa792, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa7a7, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0xa7ad, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa7c1, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0xa7c4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0xa802, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa813, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa819, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0x6bcc, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa833, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0xa85b, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa88e, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0xa890, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa895, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa8a4, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0xa8bd, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa8c1, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa8c6,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0xa8c9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa8d5,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa8d7, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0xa8da, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa901, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0xa904, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa903, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0xa908, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0xa90c, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0xa91d, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0x6c5e, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa928, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0x6c89, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa93b, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0x6ca7, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa955, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa956, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0x6cb4, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa992, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0xa99e, 0xa99d, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0xa9a0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0xa9b2, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0xa9bd, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa9be, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0x6cce, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0xa9d3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa9d4, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0xa9d7, 0, 0, 0xa9d5, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0xa9dd, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa9db, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xaa02, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0xaa04, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0xaa07, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0xaa0f, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0xaa0e, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0xaa15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0xaa14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xaa1d, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0xaa22, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0xaa2f, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0xaa49, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xaa4b, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0xaa52, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0xaa59, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0xaa95, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0xaa9a, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0xaaa6, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0xaab6, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xaab8,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0xaaba, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0xaabd, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0xaabf, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0xaac3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xaaca, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0xaad0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xaad3, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0x6d3d, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x82a4, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0xab24, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0xab2e, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0x6d93, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xab3d, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0xab55, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xab81, 0xab82, 0xab5e, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0x6da9, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0xab93, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xab96, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xabc5,
    0xabc4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0xabcb, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0xabce, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xabd3, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0xac0a, 0xac09, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0xac0c, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0x6dcc, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0xac14, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0xac1c, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0xac1e, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0xac22, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xac36, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0xac43, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0xac57, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0xac59, 0, 0, 0, 0, 0, 0, 0, 0, 0xac5a, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xac85, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0xac8f, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0xac92, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xac99, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xaca2,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0xaca8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x6e29, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0xacb9, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0xacbe, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x6e31, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0xacc6, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xaccb, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0xacda, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xacde, 0xad01, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xad0c, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xad0f,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xad30, 0, 0, 0xad2f, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0xad37, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xad45, 0xad46, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xad51,
    0xad52, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0xad5e, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xad81, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0xad8d, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0xad8c, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xad96, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0xad97, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0xad9e, 0, 0, 0, 0, 0, 0, 0xad9d, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0xadae, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0xadaf, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0xadb7, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0xadba, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0xadbc, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0xadbd, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xadc1, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xadc5, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0xadc7, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0xadc9, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xadd1, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0xae02, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0xae03, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0xae18, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0xae22, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0xae2c, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0xae36, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xae39, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0xae3d, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xae56, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0xae8c, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0xaeab, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xaeb9, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0xaeac, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xaebd, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xaebb,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0xaec7, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0xaed0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xaecd, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0xaf05, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xaf0b,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0xaf09, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0xaf15, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xaf12, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0x6f46, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0xaf38, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xaf3a, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0xaf4e, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0xaf50, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xaf52,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0xaf56,
];

static ENCODE1: [u16; 28579] = [
    0x4081, 0x4082, 0x4083, 0x4097, 0, 0x4099, 0x409a, 0x409b, 0x40b2, 0x40b3, 0x40b4, 0x40b5, 0x40b6, 0x40b7, 0x40b8, 0x40b9,
    0x40ba, 0x40bb, 0x4109, 0x410e, 0x40ac, 0x40ad, 0x413a, 0x413b, 0x4138, 0x4139, 0, 0, 0x40a1, 0x46c0, 0, 0x46c1,
    0x4346, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0x4113, 0x4114, 0x4115, 0, 0, 0, 0, 0, 0x4116, 0x4117, 0x419c, 0, 0,
    0, 0x4201, 0x4202, 0x4203, 0x4204, 0x4205, 0x4206, 0x4207, 0x4208, 0x4209, 0x420a, 0x420b, 0x420c, 0x420d, 0x420e, 0x420f,
    0x4210, 0x4211, 0x4212, 0x4213, 0x4214, 0x4215, 0x4216, 0x4217, 0x4218, 0x4219, 0x421a, 0x421b, 0x421c, 0x421d, 0x421e, 0x421f,
    0x4220, 0x4221, 0x4222, 0x4223, 0x4224, 0x4225, 0x4226, 0x4227, 0x4228, 0x4229, 0x422a, 0x422b, 0x422c, 0x422d, 0x422e, 0x422f,
    0x4230, 0x4231, 0x4232, 0x4233, 0x4234, 0x4235, 0x4236, 0x4237, 0x4238, 0x4239, 0x423a, 0x423b, 0x423c, 0x423d, 0x423e, 0x423f,
    0x4240, 0x4241, 0x4242, 0x4243, 0x4244, 0x4245, 0x4246, 0x4247, 0x4248, 0x4249, 0x424a, 0x424b, 0x424c, 0x424d, 0x424e, 0x424f,
    0x4250, 0x4251, 0x4252, 0x4253, 0x4254, 0x4255, 0x4256, 0, 0, 0, 0, 0x408b, 0x408c, 0x4095, 0x4096, 0x4119,
    0x41db, 0x4281, 0x4282, 0x4283, 0x4284, 0x4285, 0x4286, 0x4287, 0x4288, 0x4289, 0x428a, 0x428b, 0x428c, 0x428d, 0x428e, 0x428f,
    0x4290, 0x4291, 0x4292, 0x4293, 0x4294, 0x4295, 0x4296, 0x4297, 0x4298, 0x4299, 0x429a, 0x429b, 0x429c, 0x429d, 0x429e, 0x429f,
    0x42a0, 0x42a1, 0x42a2, 0x42a3, 0x42a4, 0x42a5, 0x42a6, 0x42a7, 0x42a8, 0x42a9, 0x42aa, 0x42ab, 0x42ac, 0x42ad, 0x42ae, 0x42af,
    0x42b0, 0x42b1, 0x42b2, 0x42b3, 0x42b4, 0x42b5, 0x42b6, 0x42b7, 0x42b8, 0x42b9, 0x42ba, 0x42bb, 0x42bc, 0x42bd, 0x42be, 0x42bf,
    0x42c0, 0x42c1, 0x42c2, 0x42c3, 0x42c4, 0x42c5, 0x42c6, 0x42c7, 0x42c8, 0x42c9, 0x42ca, 0x42cb, 0x42cc, 0x42cd, 0x42ce, 0x42cf,
    0x42d0, 0x42d1, 0x42d2, 0x42d3, 0x42d4, 0x42d5, 0x42d6, 0x43d2, 0x43d3, 0x43d4, 0x43d5, 0x4086, 0x409c, 0x4093, 0x4094, 0x4118,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0x434e, 0x434f, 0x4350, 0x4351, 0x4352, 0x4353, 0x4354, 0x4355, 0x4356, 0x4357, 0x4359, 0x435a, 0x435b, 0x435c, 0x435d, 0x435e,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0x46ca, 0x46cb, 0, 0, 0, 0, 0, 0, 0x46cc, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0x4421, 0x4422, 0x4423, 0x4424, 0x4425, 0x4426, 0x4427, 0x4428, 0x4429, 0x442a, 0x442b, 0x442c, 0x442d, 0x442e, 0x442f,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0x46c5, 0x46c6, 0x46c7, 0x46c8, 0x46c9, 0, 0, 0, 0, 0, 0, 0,
    0, 0x4430, 0x4431, 0x4432, 0x4433, 0x4434, 0x4435, 0x4436, 0x4437, 0x4438, 0x4439, 0x443a, 0x443b, 0x443c, 0x443d, 0x443e,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0x463b, 0x463c, 0x463d, 0x463e, 0x463f, 0x4640, 0x4641, 0x4642, 0x4643, 0x4644, 0x4645, 0x4646, 0x4647, 0x4648, 0x4649, 0x464a,
    0x464b, 0x464c, 0x464d, 0x464e, 0, 0x4651, 0, 0, 0, 0x4650, 0, 0, 0x4653, 0x4652, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x464f, 0, 0, 0, 0, 0,
    0, 0, 0, 0x46a6, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x46aa, 0, 0,
    0, 0, 0, 0, 0x46a1, 0, 0, 0, 0x46a4, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x46a2, 0x46ac, 0, 0, 0x46ab, 0x46a5, 0, 0, 0, 0x46ad, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0x46a7, 0, 0, 0, 0, 0x46af, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0x46a0, 0x46ae, 0, 0, 0x46a3, 0, 0,
    0, 0x46a8, 0, 0, 0, 0, 0, 0x46a9, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x46bf, 0x46cf, 0x46ce, 0x46cd, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x46b3, 0x46b4,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x46b0, 0x46b1, 0x46b2, 0,
    0, 0x46b6, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0x46b5, 0, 0, 0, 0, 0, 0, 0x41be, 0, 0x46c3, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x4703, 0, 0, 0, 0x808d, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8092, 0, 0x8093, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0x80be, 0, 0x80b6, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x80de, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0x4733, 0, 0, 0, 0, 0, 0, 0x818b, 0, 0, 0,
    0, 0xaa48, 0, 0, 0, 0, 0, 0x818f, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x473b, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x81a8,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x81bd, 0x81be, 0,
    0, 0, 0, 0x81c1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x81c7, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0x8203, 0, 0x8206, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0x820f, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8218, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0x8222, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0x822a, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8259, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0x829f, 0, 0, 0, 0, 0x82a3, 0, 0, 0x82a1, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x82b7,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0x8403, 0x8405, 0, 0, 0, 0, 0, 0, 0, 0, 0x8409, 0x8408, 0, 0, 0,
    0, 0, 0, 0, 0, 0x840c, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x57bf, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0x841e, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x57cf, 0, 0, 0, 0, 0, 0x8436, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0x8439, 0, 0, 0, 0, 0, 0, 0, 0, 0x843c, 0, 0,
    0x843e, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x844f,
    0, 0, 0, 0, 0, 0, 0x8451, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0x8454, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8459, 0, 0, 0,
    0, 0x845b, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x861b, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0x8626, 0, 0, 0x862a, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8640,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x86bb, 0,
    0, 0, 0, 0x86bf, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0x86d1, 0x8716, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x86dc, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x870e, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x8712, 0, 0x8714, 0, 0, 0,
    0, 0, 0x6aa9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x874d, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0x8745, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0x8788, 0x8789, 0, 0, 0, 0, 0x878c, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0x8794, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0x6ade, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0x6b01, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x87a8, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0x87bd, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x6b1a,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0x87d7, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0xa71b, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0xa722, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0xa751, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa75e, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0xa7a0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa7b4, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0xa7d0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0xa7d7, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0xa808, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x6bc6,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0xa81f, 0, 0, 0, 0, 0, 0xa821, 0, 0xa822, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0xa829, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0xa830, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0xa894, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x6c2d, 0, 0, 0xa8a6, 0, 0xa8a8, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa8bc, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa8c7, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0xa8cc, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa902, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0xa90d, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0xa919, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0xa944, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0xa954, 0, 0, 0, 0, 0, 0, 0xa957,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0xa95d, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0xa993, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa997,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0xa9a7, 0, 0, 0, 0, 0, 0, 0, 0xa9ab, 0,
    0, 0, 0, 0xa9a8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0xa9b3, 0, 0, 0, 0, 0, 0, 0xa9b7, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0x6ccd, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0xaa0b, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0xaa16, 0, 0, 0, 0, 0, 0, 0xaa1b, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0xaa2e, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xaa3d, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0xaa41, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xaa9e, 0,
    0xaaa2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0xaaa8, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0xaaaa, 0, 0, 0, 0, 0xaaac, 0, 0, 0,
    0, 0, 0xaaaf, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0x6d39, 0, 0, 0, 0, 0, 0, 0, 0x6d3a, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0xaacc, 0, 0, 0, 0xaace, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0xaad7, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0xab15, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xab12, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0xab14, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0xab39, 0, 0, 0, 0, 0xab34, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0xab4d, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0xab4e, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x6db1, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0xabaf, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0xabcc, 0, 0, 0, 0, 0x6dc0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xac04,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0xac1a, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0xac23, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0xac2e, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xac33,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xac4b, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0xac89, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xac9f, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0xaca9, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0x6e2b, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xacbc, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0xad07, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0x6eb8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0xadca, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xadd0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0xadd5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0xadd8, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xae17, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xae35, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0xae86, 0, 0, 0, 0, 0, 0, 0, 0xae88, 0, 0, 0, 0, 0,
    0, 0, 0xae8a, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0xae91, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0x6f1e, 0, 0, 0, 0, 0, 0, 0, 0,
    0xae9f, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0xaf0a, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0xaf0d, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0xaf2b, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0xaf40, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0x484c, 0x51da, 0x8082, 0x4e17, 0, 0, 0, 0x55dc, 0x4f46, 0x4d90, 0x4f45, 0x491c, 0, 0x54b4, 0x569f, 0x8083,
    0x5802, 0x488f, 0x8084, 0, 0x49ce, 0x5803, 0x5004, 0x5922, 0x4ab6, 0x551a, 0, 0, 0, 0, 0x4f47, 0,
    0, 0x571e, 0, 0, 0, 0, 0x5522, 0, 0x4704, 0x8085, 0x5804, 0x8086, 0xa80e, 0x51c6, 0x8087, 0x4705,
    0x4706, 0x5805, 0x4b5a, 0, 0, 0, 0x5806, 0, 0x4a3d, 0x5190, 0, 0x4e47, 0x5807, 0, 0, 0x5808,
    0x8088, 0, 0x5809, 0x5395, 0, 0x4ab7, 0, 0x8089, 0x808a, 0, 0, 0x5397, 0, 0x5343, 0x4c23, 0x5593,
    0, 0x808c, 0, 0, 0, 0x64a9, 0x580a, 0x4f48, 0x580b, 0x4915, 0x808f, 0, 0, 0x4b45, 0x4c50, 0x5649,
    0, 0, 0x5b06, 0, 0, 0, 0, 0, 0, 0x8090, 0, 0, 0, 0, 0, 0,
    0, 0x56d0, 0, 0x535d, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x4a05, 0,
    0x4a95, 0, 0x580c, 0, 0, 0x580d, 0x571b, 0, 0x569d, 0x50c8, 0x580f, 0x4dd6, 0x5353, 0x4707, 0x5812, 0,
    0, 0x489e, 0x4c3f, 0, 0x4c3e, 0x4846, 0, 0, 0x57ab, 0x57aa, 0, 0x4d13, 0x4801, 0x8091, 0x5813, 0x5814,
    0x5815, 0x5594, 0x5816, 0, 0x4c52, 0x4847, 0x55d2, 0, 0x4adc, 0, 0, 0x4add, 0x4ade, 0x5242, 0x571c, 0,
    0x5817, 0, 0, 0x5818, 0, 0, 0x5819, 0, 0, 0x8094, 0x4fad, 0x8095, 0x8097, 0, 0, 0,
    0x4e9a, 0x4fae, 0x581e, 0x8098, 0x581c, 0, 0x581d, 0x4ab8, 0x8099, 0, 0x4d03, 0x4950, 0, 0x581b, 0x581a, 0x5509,
    0x809a, 0, 0, 0, 0x4da6, 0x4da5, 0x511e, 0x581f, 0x54b5, 0x5047, 0x809c, 0, 0, 0x4098, 0x5820, 0x5822,
    0, 0x4708, 0, 0x5145, 0x5741, 0x482a, 0, 0, 0, 0, 0, 0x809b, 0, 0x5821, 0x491e, 0,
    0x4b24, 0x809d, 0x51c7, 0, 0, 0x809e, 0x4bcf, 0x5823, 0, 0, 0, 0x5384, 0, 0x4709, 0, 0x470a,
    0x809f, 0x4a4b, 0, 0x470b, 0, 0, 0, 0, 0, 0x5824, 0x482b, 0x470c, 0, 0x4c40, 0x4a4c, 0x54da,
    0x5412, 0x4ab9, 0, 0, 0, 0, 0x80a0, 0, 0, 0, 0x4951, 0, 0x5847, 0x52a1, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x53cc,
    0x5826, 0, 0, 0, 0x541c, 0, 0x5742, 0x80a2, 0x4f8d, 0, 0x4da7, 0, 0x4dd7, 0x4920, 0x80a3, 0,
    0, 0, 0, 0x5231, 0, 0, 0x5182, 0x582a, 0x470e, 0x470f, 0, 0, 0, 0x482c, 0x5243, 0x4e9b,
    0x4d14, 0x5684, 0, 0x512e, 0x80a4, 0x491f, 0x4710, 0x5829, 0x80a5, 0x569e, 0x5825, 0x5827, 0x4d4e, 0x5828, 0x5a84, 0x4711,
    0x470d, 0, 0, 0, 0x80a1, 0, 0, 0, 0, 0x5830, 0x4712, 0, 0x4713, 0, 0, 0x5833,
    0x5831, 0, 0, 0x4922, 0, 0x551b, 0x582b, 0x80a7, 0x80a8, 0, 0x80a9, 0x582f, 0x4c53, 0x80aa, 0x4714, 0x4da8,
    0, 0, 0x80ab, 0x4a06, 0, 0x80ac, 0x5834, 0, 0x582c, 0, 0x4715, 0x5743, 0, 0x4dd8, 0, 0x582d,
    0, 0x5832, 0x80ad, 0, 0x4716, 0, 0x5835, 0x4717, 0x582e, 0, 0x80ae, 0x4b01, 0, 0x482d, 0, 0,
    0x4b02, 0x4921, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x5a85, 0, 0x55d9, 0x54ce, 0x4c54,
    0, 0, 0x80b0, 0, 0, 0x4f8f, 0x5717, 0, 0, 0, 0, 0, 0, 0, 0x80b1, 0x5538,
    0, 0, 0x4b98, 0x5105, 0x4944, 0x80b2, 0, 0, 0, 0x4719, 0x4eb3, 0x80b3, 0, 0, 0x5839, 0x80b4,
    0x583e, 0x583c, 0x80b5, 0, 0x5837, 0, 0, 0x510f, 0x583a, 0, 0x583d, 0x583b, 0, 0x553d, 0, 0x5838,
    0x471a, 0x4f8e, 0, 0x55d3, 0x583f, 0x5840, 0x80af, 0, 0, 0, 0, 0, 0, 0, 0x4e84, 0x584d,
    0, 0x4701, 0x80b7, 0x53b0, 0, 0x5496, 0x5848, 0, 0x5550, 0, 0x4916, 0, 0, 0, 0x584c, 0,
    0x80b8, 0x471b, 0x471c, 0, 0, 0x5846, 0x584f, 0, 0, 0x50b2, 0, 0x4c24, 0, 0x53bc, 0x471d, 0x6027,
    0x80b9, 0x584e, 0x52bd, 0x80ba, 0x5843, 0, 0x4c56, 0, 0x471e, 0x4c55, 0x5841, 0, 0x80bb, 0, 0x80bc, 0x4e3a,
    0, 0x5849, 0x80bd, 0x554f, 0x51ad, 0x5845, 0x4bd1, 0x471f, 0x5842, 0x584a, 0x5844, 0x5731, 0x584b, 0x57a1, 0x4720, 0,
    0, 0, 0, 0, 0, 0, 0x4b46, 0, 0, 0x4bd0, 0, 0x4722, 0, 0, 0, 0,
    0x4721, 0x4723, 0x80bf, 0x5850, 0, 0, 0x80c0, 0x5851, 0x5855, 0x482e, 0, 0, 0, 0, 0x80c1, 0x5530,
    0x5854, 0, 0, 0x80c2, 0, 0x5853, 0x5857, 0x80c3, 0, 0, 0x5856, 0, 0x5244, 0, 0, 0,
    0, 0, 0, 0x80c4, 0, 0x4bd2, 0x80c5, 0, 0, 0, 0x80c6, 0, 0x5858, 0, 0, 0,
    0x80c7, 0, 0x4e25, 0, 0x5106, 0x5245, 0x4b56, 0, 0x5859, 0, 0, 0, 0, 0x4a96, 0, 0,
    0x585a, 0, 0, 0, 0, 0x585c, 0, 0, 0x80c9, 0, 0, 0, 0, 0x5595, 0, 0,
    0, 0x4bc6, 0x80ca, 0x80cb, 0x4724, 0x80cc, 0x80cd, 0, 0x4d91, 0x5457, 0x585b, 0, 0x80ce, 0, 0, 0,
    0, 0, 0, 0x80c8, 0, 0, 0, 0, 0, 0, 0x80cf, 0, 0x4d25, 0x56a3, 0, 0,
    0, 0x80d1, 0x585e, 0x5883, 0x585d, 0x4d24, 0, 0x4edd, 0, 0, 0x80d2, 0x80d3, 0, 0, 0x4b99, 0,
    0, 0, 0x5884, 0, 0x80d4, 0x4b2f, 0, 0x80d5, 0, 0x5881, 0x5882, 0, 0x4725, 0x530f, 0x80d8, 0x50dc,
    0x4727, 0x4b03, 0, 0, 0x80da, 0x55ad, 0x5885, 0, 0, 0x80db, 0x571d, 0, 0, 0, 0x5886, 0,
    0, 0x80dc, 0, 0x5889, 0, 0x5887, 0x4728, 0x50ae, 0, 0x80dd, 0, 0, 0, 0x5888, 0x588a, 0,
    0, 0, 0x4726, 0x80d6, 0, 0x588c, 0, 0, 0, 0x588b, 0, 0x5528, 0, 0, 0, 0,
    0x4a97, 0x588e, 0x588f, 0x472b, 0x490f, 0, 0x472a, 0, 0x8181, 0x588d, 0, 0x472c, 0, 0, 0, 0,
    0, 0, 0x4e54, 0, 0x5892, 0x5891, 0x5890, 0x8183, 0x5836, 0, 0x5893, 0x8184, 0, 0, 0x472d, 0x4ede,
    0, 0x5894, 0, 0, 0, 0, 0, 0, 0, 0, 0x5685, 0, 0, 0, 0, 0,
    0, 0, 0x5639, 0, 0, 0x472e, 0, 0x5896, 0, 0, 0x5895, 0x5898, 0x5897, 0, 0, 0x5899,
    0x589a, 0x4854, 0, 0x4c15, 0x4b9b, 0x4e9c, 0x51db, 0x4b04, 0x5048, 0x4c57, 0x472f, 0x4cce, 0x589c, 0x5628, 0x52a6, 0,
    0x4dd9, 0, 0x589b, 0, 0x589d, 0x4731, 0, 0x4732, 0, 0, 0x52be, 0, 0x49d5, 0, 0, 0,
    0x8186, 0, 0x589e, 0, 0, 0x535e, 0, 0, 0x5094, 0x58a0, 0x58a1, 0x540c, 0x4c58, 0x579b, 0x58a2, 0,
    0, 0x4b06, 0, 0x8188, 0, 0x551c, 0x5116, 0x4b51, 0x5295, 0, 0, 0xaa54, 0x4bd3, 0, 0, 0,
    0x58a3, 0, 0x58a4, 0x8189, 0, 0x5342, 0x48bf, 0, 0, 0x58a7, 0x4d5d, 0x818a, 0x58a6, 0x4d26, 0, 0x58a8,
    0x634e, 0x58a9, 0x55a1, 0x58aa, 0, 0x58ab, 0x58ac, 0x4f49, 0x818c, 0x4e2c, 0, 0, 0, 0x4734, 0, 0,
    0x4a07, 0, 0x58af, 0x818d, 0x58ad, 0x561d, 0x58ae, 0, 0x54ba, 0x58b0, 0x58b1, 0x58b2, 0x52bf, 0x818e, 0, 0,
    0x58b6, 0x58b4, 0x58b5, 0x58b3, 0x4d43, 0x58b7, 0x564a, 0x5744, 0, 0, 0, 0, 0x8190, 0x58b8, 0, 0,
    0, 0, 0, 0x4735, 0x5008, 0x58b9, 0x4eba, 0, 0, 0x58ba, 0x4736, 0x51dc, 0x571f, 0x52c0, 0, 0,
    0, 0, 0, 0, 0, 0, 0x5925, 0, 0, 0, 0, 0x58bb, 0x6a05, 0x4b25, 0x4737, 0,
    0x58bc, 0x55be, 0x4738, 0, 0, 0, 0x4ec8, 0x515c, 0, 0x58be, 0x5344, 0, 0, 0x58bf, 0x4739, 0,
    0x58c0, 0x498e, 0, 0x8193, 0x8194, 0x58c1, 0x4b07, 0, 0x532c, 0x48da, 0x4eb0, 0, 0, 0x5401, 0x58c2, 0,
    0x52c1, 0x473a, 0x8195, 0x4faf, 0x58c3, 0, 0x550c, 0x503a, 0x4a02, 0, 0x4a09, 0x58c4, 0, 0, 0x58c6, 0,
    0, 0x4b9a, 0x8196, 0x473c, 0x58c5, 0x473d, 0x8197, 0x5753, 0, 0, 0, 0, 0, 0x4ec9, 0, 0,
    0, 0, 0, 0, 0x541d, 0x552c, 0, 0x58c7, 0, 0x56d8, 0x58c8, 0, 0, 0, 0x58c9, 0,
    0x52de, 0, 0, 0x58ca, 0, 0, 0x5009, 0x4d5e, 0x4bd4, 0x58cb, 0x4da9, 0x4ccf, 0, 0, 0, 0,
    0, 0, 0, 0x5246, 0x58cd, 0, 0, 0x5107, 0, 0x473e, 0x4d4f, 0x58ce, 0x58cf, 0x5090, 0, 0x58cc,
    0, 0, 0, 0, 0x58d1, 0x8199, 0x5596, 0x473f, 0, 0, 0, 0x4cc4, 0x819a, 0x47de, 0x58d0, 0,
    0, 0x4740, 0, 0x4bd5, 0x4d3e, 0x53cd, 0, 0, 0, 0x58d4, 0x58d2, 0, 0x819b, 0, 0, 0x54db,
    0x4f4a, 0x58db, 0x49c4, 0x58d5, 0x58d3, 0x50af, 0, 0x819c, 0, 0, 0, 0, 0, 0x58d7, 0, 0x58d6,
    0, 0, 0x819e, 0x49a4, 0x819d, 0, 0, 0x4bc0, 0x58dc, 0x570d, 0, 0, 0, 0x58d8, 0, 0,
    0, 0x58dd, 0x58da, 0x4741, 0x58d9, 0, 0, 0, 0x81a0, 0, 0, 0x572f, 0, 0, 0, 0x4c59,
    0x4923, 0, 0, 0x5754, 0x81a2, 0, 0x81a3, 0, 0, 0x4ed5, 0x52b8, 0x4cc5, 0x5902, 0x5903, 0, 0x81a4,
    0, 0x5745, 0, 0, 0x578b, 0x5905, 0, 0, 0, 0x4c5a, 0x81a5, 0x81a6, 0x5904, 0, 0x498f, 0,
    0, 0x5906, 0, 0x55b6, 0, 0x521c, 0, 0x5686, 0x4742, 0x5539, 0x81a7, 0, 0x4744, 0x5907, 0, 0,
    0x4745, 0x81a9, 0x6835, 0, 0, 0x5310, 0x4746, 0x5908, 0x4a0a, 0x5613, 0, 0x4747, 0, 0x4f01, 0x5909, 0x5547,
    0x590d, 0, 0x500a, 0x590a, 0x4b30, 0, 0x590b, 0x4a0b, 0, 0, 0, 0, 0, 0, 0, 0,
    0x4749, 0, 0x4b8e, 0x590e, 0, 0x590f, 0, 0x81ab, 0x5910, 0x5911, 0x4e3b, 0x474a, 0, 0, 0x4c5b, 0x563e,
    0x474b, 0x5648, 0x5357, 0, 0, 0x5551, 0x5912, 0x474c, 0x5913, 0, 0x81ac, 0x81ad, 0, 0x5915, 0, 0x5917,
    0x5916, 0, 0, 0, 0, 0x5918, 0x491d, 0x55ac, 0, 0x4d5c, 0x5919, 0, 0x474d, 0x50b9, 0, 0,
    0x4f02, 0x4b09, 0, 0x591a, 0x81ae, 0, 0, 0, 0, 0, 0x543b, 0, 0, 0, 0, 0x591b,
    0, 0x591c, 0, 0x591d, 0, 0x81af, 0, 0, 0x591e, 0x5484, 0x4b48, 0x4845, 0, 0, 0x81b0, 0x531f,
    0x591f, 0x4e9d, 0x81b1, 0x5049, 0, 0x5921, 0x5920, 0x4f03, 0x4c41, 0x5923, 0x541e, 0, 0, 0x5924, 0, 0,
    0, 0x543c, 0x5114, 0x514e, 0x4b08, 0, 0, 0x534e, 0x5191, 0, 0x53ce, 0, 0x55ae, 0, 0x5926, 0,
    0x504a, 0x474f, 0, 0x4750, 0, 0, 0x4b95, 0x81b4, 0, 0x5927, 0, 0, 0x81b5, 0, 0x5928, 0x488c,
    0x4855, 0x4a4d, 0, 0x5108, 0x4ab1, 0x56d1, 0, 0x592b, 0x4917, 0, 0x81b6, 0x592a, 0, 0x4751, 0, 0x4b0a,
    0, 0, 0x592c, 0, 0x5651, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0x4752, 0, 0, 0x592d, 0, 0x5732, 0, 0x4c5c, 0, 0, 0x4753, 0, 0x4c16,
    0x592e, 0, 0, 0, 0x81b7, 0x5930, 0x592f, 0, 0x4fbf, 0x4899, 0, 0, 0, 0x48be, 0x5931, 0,
    0x5932, 0, 0x4754, 0x4c17, 0x81b8, 0, 0x5933, 0x81ba, 0, 0, 0, 0x4ace, 0, 0, 0, 0,
    0x81bb, 0, 0x4d92, 0x5934, 0, 0, 0, 0, 0x55d4, 0x4d15, 0x4aba, 0x5687, 0x50b0, 0x541f, 0x4e5d, 0,
    0, 0, 0, 0, 0x4ea7, 0x81bf, 0x4e48, 0x4e55, 0, 0x4ed6, 0x81c0, 0x5420, 0, 0, 0, 0x5937,
    0, 0x48a3, 0x50b1, 0x4c5d, 0x4c25, 0x4b47, 0, 0, 0x593b, 0x5181, 0x515e, 0x4b0b, 0x4f04, 0x593c, 0x593a, 0x4924,
    0x5146, 0x4e18, 0x4dab, 0x4886, 0x81c2, 0x81c3, 0x49d0, 0x4cc6, 0x4daa, 0, 0x593d, 0, 0, 0, 0, 0,
    0, 0x593e, 0, 0x4aa9, 0x49a6, 0, 0, 0, 0x4cc7, 0x4aa8, 0x523f, 0x4885, 0x5311, 0x561e, 0x4c81, 0x56d9,
    0x52a7, 0x4c5e, 0x4755, 0, 0, 0, 0, 0, 0, 0, 0, 0x4b8f, 0, 0x5947, 0x57de, 0x4b43,
    0x55aa, 0, 0, 0, 0x81c5, 0, 0x543d, 0x4756, 0x81c6, 0x5946, 0, 0x4a3e, 0x5941, 0x5942, 0x5944, 0,
    0, 0, 0, 0, 0, 0, 0x5945, 0, 0x4abb, 0x4fc1, 0, 0x550d, 0x5943, 0x593f, 0x4c43, 0,
    0x5940, 0, 0x5784, 0x81c8, 0, 0, 0x5552, 0, 0x5248, 0x4c42, 0x4cd0, 0, 0, 0x4757, 0x5948, 0,
    0, 0x533d, 0, 0, 0, 0x81c4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x594c,
    0, 0, 0x81c9, 0, 0, 0, 0x81ca, 0, 0x4e5e, 0, 0x4e56, 0x4759, 0x81cb, 0, 0, 0,
    0x594f, 0x594d, 0, 0x5603, 0x475a, 0x594a, 0x5953, 0x594e, 0, 0, 0, 0x5951, 0x4c26, 0x561f, 0, 0x475b,
    0x5952, 0, 0, 0, 0x5954, 0, 0x5956, 0, 0x475c, 0, 0x81cc, 0x4d50, 0x57a2, 0x81cd, 0x594b, 0x5949,
    0x5955, 0, 0x5950, 0, 0, 0x81ce, 0x475d, 0, 0, 0, 0, 0, 0x4758, 0, 0, 0,
    0x81cf, 0x475e, 0x5958, 0, 0x5983, 0x595a, 0x81d0, 0, 0x595e, 0x4781, 0, 0x5981, 0x595b, 0x81d1, 0x81d2, 0x599e,
    0, 0, 0x4d49, 0x4991, 0, 0, 0, 0x81d3, 0x5959, 0, 0x81d4, 0, 0x5985, 0x4856, 0x5984, 0x81d5,
    0x4805, 0x54aa, 0x5982, 0x81d6, 0x595c, 0, 0x4782, 0x5957, 0x595d, 0x4d28, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0x5986, 0, 0, 0, 0, 0, 0, 0,
    0, 0x4857, 0x598f, 0, 0, 0x5987, 0x5988, 0, 0x4f05, 0x55c9, 0, 0, 0x81d8, 0x598d, 0x598c, 0x81d9,
    0, 0x81da, 0x528f, 0x81db, 0, 0, 0, 0, 0, 0, 0x598e, 0, 0, 0x598b, 0, 0x4783,
    0x81dc, 0x81dd, 0, 0, 0x4894, 0, 0x4d16, 0x4f90, 0, 0x81de, 0, 0, 0, 0, 0x4784, 0x5989,
    0x52c2, 0, 0, 0, 0x598a, 0, 0x4802, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x4785, 0, 0, 0x5994, 0x5683,
    0, 0x4f07, 0, 0x599a, 0, 0x4786, 0, 0, 0x5999, 0x5990, 0, 0, 0x8201, 0, 0x5123, 0,
    0x5991, 0x8202, 0, 0, 0x514f, 0x5996, 0x4f06, 0x8204, 0, 0, 0x8205, 0, 0x5993, 0, 0, 0x5644,
    0x4787, 0, 0, 0x4b9c, 0, 0, 0x5997, 0x5998, 0, 0, 0, 0, 0x5995, 0x599b, 0x4788, 0,
    0x8207, 0x8208, 0, 0x5992, 0x8209, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x59a1, 0x59a6, 0x820b, 0x59a2, 0,
    0x599d, 0x4789, 0x820c, 0x59a7, 0x5091, 0, 0x478a, 0x59a9, 0x820d, 0x4c82, 0x599f, 0x51dd, 0, 0, 0x478b, 0,
    0, 0x820e, 0, 0, 0, 0, 0, 0, 0x59a3, 0x599c, 0x4a0d, 0, 0x4a4e, 0x49c5, 0x59a4, 0x59a0,
    0, 0, 0, 0, 0, 0, 0, 0x4bd6, 0x59aa, 0x59a8, 0x50b3, 0x4aaa, 0x4b0c, 0x478d, 0x59a5, 0,
    0x4b54, 0, 0, 0, 0, 0, 0x48a4, 0, 0, 0, 0, 0, 0, 0, 0, 0x8213,
    0, 0, 0, 0, 0x59ae, 0x59ac, 0, 0x5a07, 0, 0x8214, 0, 0, 0x8215, 0, 0x478e, 0,
    0, 0x8216, 0x8210, 0, 0x59b1, 0, 0, 0, 0, 0, 0x59ab, 0, 0x59af, 0x8217, 0, 0x59ad,
    0, 0, 0x8219, 0x4dac, 0x59b0, 0, 0, 0, 0, 0x821b, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0x59b3, 0, 0x59b8, 0, 0, 0, 0x59b6, 0x59b5, 0,
    0, 0, 0, 0, 0, 0, 0x5192, 0x821e, 0x4790, 0x4925, 0, 0, 0, 0, 0x4791, 0,
    0x821f, 0, 0, 0, 0x59b2, 0, 0x59b4, 0x4f08, 0x4893, 0, 0, 0x59b7, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0x821c, 0x493e, 0, 0, 0, 0, 0, 0x59c2,
    0x8220, 0x4f5c, 0x59be, 0, 0x59bc, 0, 0x59bd, 0x8221, 0x59bf, 0, 0, 0x4792, 0, 0x8223, 0, 0x8224,
    0x8225, 0, 0x489d, 0, 0, 0, 0, 0x8226, 0, 0x4793, 0, 0, 0x5099, 0, 0x59b9, 0,
    0x59ba, 0, 0, 0x6a07, 0, 0, 0, 0, 0, 0, 0, 0x49da, 0, 0, 0x8227, 0,
    0x8228, 0, 0, 0, 0x59c1, 0, 0x4795, 0, 0x4a4f, 0, 0x59c4, 0x59c0, 0x59c3, 0x8229, 0, 0x4797,
    0, 0x4798, 0x4799, 0, 0x550e, 0, 0x4794, 0, 0x5335, 0, 0x5418, 0, 0, 0, 0, 0,
    0x59c6, 0, 0, 0, 0, 0, 0x59c5, 0x49a5, 0x822b, 0, 0x59c7, 0, 0x822c, 0, 0, 0x59ca,
    0, 0, 0, 0, 0x59c9, 0x822d, 0, 0, 0, 0x479a, 0x822e, 0, 0, 0x822f, 0x479b, 0,
    0x59c8, 0, 0x5399, 0, 0, 0x59cb, 0, 0, 0x8230, 0x479c, 0, 0, 0x479d, 0x8231, 0x59cc, 0,
    0, 0, 0x8232, 0x479e, 0x59ce, 0, 0x59cd, 0, 0, 0, 0, 0, 0x59d0, 0, 0, 0,
    0x59d3, 0x59d1, 0x59cf, 0x59d2, 0, 0x8233, 0, 0, 0x59d4, 0x479f, 0x47a0, 0, 0, 0x8234, 0x59d5, 0,
    0, 0x59d6, 0, 0x59d7, 0, 0, 0, 0x59d8, 0x58a5, 0, 0x4e5c, 0x4dad, 0, 0, 0x4953, 0x8235,
    0x4858, 0, 0, 0x51a4, 0, 0, 0, 0, 0x8236, 0, 0, 0, 0, 0, 0x59d9, 0,
    0x4d04, 0, 0x482f, 0x4fbe, 0, 0, 0x8237, 0x8238, 0, 0x59da, 0x4c27, 0, 0, 0x4cd1, 0, 0x59dc,
    0x59db, 0, 0, 0x5540, 0x59dd, 0, 0, 0, 0x5a01, 0x59de, 0x47a1, 0x5a02, 0, 0x5a03, 0, 0x4bd7,
    0, 0, 0x48c0, 0x5a04, 0, 0x823a, 0x5a06, 0, 0x5a05, 0, 0, 0, 0x5a08, 0, 0, 0x52ba,
    0, 0x47a3, 0, 0x823b, 0, 0, 0x5a09, 0x4815, 0x4d3f, 0x823d, 0, 0, 0, 0x4b9d, 0, 0x47a4,
    0x51af, 0, 0, 0x47a5, 0x47a6, 0, 0, 0x5a0a, 0x5a0b, 0, 0, 0x5a0d, 0, 0, 0, 0,
    0x5a0e, 0, 0x4d44, 0, 0, 0x823f, 0x8240, 0x4b31, 0, 0, 0x5597, 0, 0x8241, 0x8242, 0x5a0c, 0x5a0f,
    0x4d21, 0x4c83, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0x5a13, 0, 0, 0x4d05, 0, 0x5193, 0, 0x8244, 0x5a10, 0x523a, 0, 0, 0, 0, 0x8245,
    0x47a7, 0, 0, 0x8246, 0x8247, 0x8248, 0, 0x47a8, 0, 0, 0, 0x8249, 0x47a9, 0, 0, 0x5a14,
    0, 0, 0x4fc2, 0, 0, 0, 0, 0, 0x5a12, 0x5a15, 0, 0x4b9f, 0, 0, 0, 0,
    0, 0, 0, 0x5a16, 0, 0, 0, 0, 0, 0, 0x824d, 0, 0x47aa, 0x824e, 0x824f, 0,
    0x5a17, 0, 0x4c84, 0x49a0, 0x5a19, 0, 0, 0, 0x8250, 0, 0x5a1a, 0, 0x824c, 0, 0, 0,
    0x5a1b, 0, 0, 0x5a18, 0, 0, 0, 0, 0x47ad, 0, 0, 0, 0, 0, 0, 0,
    0x5a11, 0, 0, 0x5a1c, 0, 0, 0x5a1d, 0x47ae, 0x47af, 0, 0, 0x55c4, 0x8253, 0, 0x4f4b, 0x47b0,
    0, 0, 0x5a1f, 0x5a20, 0x5a1e, 0, 0x5a22, 0x8251, 0, 0, 0, 0, 0x5398, 0, 0x8256, 0x4848,
    0x54b6, 0, 0, 0x5a23, 0x47b1, 0, 0x8257, 0, 0, 0, 0, 0, 0, 0x47b2, 0, 0,
    0x8258, 0, 0, 0, 0x4f5d, 0x47b3, 0x47b4, 0x4e19, 0x825a, 0x53bd, 0x4a50, 0x825b, 0x4d4b, 0x825c, 0, 0x47b5,
    0x55b9, 0, 0x5312, 0, 0x825d, 0x4bd8, 0x512f, 0, 0, 0x47b6, 0x5a21, 0x5a24, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0x5124, 0, 0, 0, 0x5a25, 0, 0, 0, 0x5a26, 0x825e, 0,
    0x8281, 0x5a28, 0, 0, 0x5249, 0, 0, 0x8282, 0, 0, 0x4a0e, 0, 0, 0, 0, 0x6a01,
    0x48c1, 0x5553, 0x8283, 0, 0x4f4c, 0x52a8, 0, 0, 0, 0x8284, 0x4d46, 0, 0, 0x5a2e, 0, 0,
    0x551d, 0x573d, 0, 0, 0, 0, 0, 0, 0, 0x8286, 0x4954, 0x5a2a, 0x8287, 0, 0, 0,
    0, 0x509a, 0x5a2d, 0, 0x52c3, 0, 0, 0x52a9, 0x52c4, 0x5419, 0x522d, 0, 0, 0, 0x4d29, 0,
    0, 0x47b8, 0x5a29, 0, 0x47b9, 0, 0, 0x8288, 0, 0x48d6, 0, 0x5296, 0, 0, 0, 0,
    0x5a2b, 0, 0x5a27, 0, 0, 0x4fb0, 0, 0, 0, 0x5a2f, 0, 0, 0x47bb, 0, 0x4eae, 0,
    0, 0, 0, 0x4b0d, 0, 0x5a30, 0, 0, 0, 0x47bc, 0x8289, 0x828a, 0, 0x828b, 0, 0x828c,
    0x828d, 0, 0, 0x5548, 0x828e, 0, 0, 0x50dd, 0, 0, 0, 0, 0x5226, 0x828f, 0x47bd, 0x5a32,
    0, 0, 0, 0, 0, 0, 0, 0, 0x55af, 0x47bf, 0x8290, 0x5a33, 0, 0, 0x5a38, 0,
    0, 0x8291, 0, 0x550f, 0, 0, 0, 0, 0x5a37, 0x5a31, 0x5a34, 0x5a36, 0, 0, 0x4d06, 0,
    0, 0x5529, 0, 0x8293, 0, 0x5a39, 0, 0x51a5, 0, 0, 0x4955, 0, 0x4f4d, 0x8294, 0x47c2, 0,
    0, 0x5a3b, 0x47c1, 0x5a3a, 0x47c3, 0x4cc8, 0, 0x5a3c, 0x5a3e, 0x5a3d, 0x47c4, 0, 0x5a40, 0, 0x5a35, 0x5a42,
    0x47c5, 0, 0x8295, 0, 0x5a41, 0x5a3f, 0, 0, 0, 0x47c6, 0, 0x4dae, 0x4fb1, 0, 0x50b4, 0x5a43,
    0x501c, 0x484d, 0x53c4, 0x8296, 0x8297, 0, 0, 0x523b, 0, 0x5a45, 0x5a44, 0x5a46, 0x5a47, 0x5a48, 0, 0,
    0, 0, 0x5a49, 0, 0, 0x8298, 0x8299, 0, 0, 0x5531, 0x5a4a, 0x829a, 0x47c7, 0x829b, 0, 0x4926,
    0x5a4b, 0, 0, 0, 0x829c, 0x569c, 0x4990, 0, 0x5929, 0x4ea8, 0x511f, 0x5a4c, 0x564b, 0, 0, 0,
    0, 0, 0x5614, 0, 0x829d, 0x5a4e, 0, 0x5147, 0, 0x5297, 0x5120, 0x54b7, 0x5a4f, 0x5a50, 0x48db, 0,
    0, 0x4e1a, 0x5a51, 0, 0, 0, 0, 0x4830, 0x5a52, 0, 0, 0, 0, 0x82a0, 0x5a53, 0,
    0, 0, 0, 0, 0x48c2, 0, 0x82a2, 0x4a51, 0x5340, 0x5554, 0, 0, 0, 0, 0x5a57, 0x50b5,
    0x5a56, 0x4ba0, 0, 0, 0x55bb, 0x5a55, 0, 0x52c5, 0x5a59, 0, 0x5a58, 0x82a5, 0, 0x47c9, 0, 0x82a6,
    0x5a5b, 0, 0x5a5a, 0, 0, 0x48dc, 0, 0x5a5c, 0x4f09, 0x5a5e, 0x5185, 0, 0x5a5d, 0x47ca, 0x5513, 0,
    0, 0, 0, 0x4ed7, 0x52bb, 0x82a8, 0x82a9, 0, 0x5a81, 0, 0, 0, 0x82aa, 0x4c85, 0, 0,
    0, 0x5a82, 0x5381, 0x543e, 0x5631, 0, 0, 0, 0, 0, 0x5385, 0x47cb, 0, 0x5a8b, 0, 0,
    0, 0, 0x47cc, 0x4a98, 0, 0, 0x56a5, 0, 0, 0x560f, 0, 0x5b0c, 0, 0x5a83, 0, 0x82ab,
    0, 0, 0, 0x5a86, 0x47cd, 0x5125, 0, 0, 0x5598, 0, 0, 0, 0x52aa, 0, 0x82ac, 0,
    0, 0, 0x5a87, 0, 0, 0, 0, 0, 0, 0x55c5, 0, 0x4d2a, 0x82ad, 0, 0x4f0a, 0,
    0, 0, 0, 0x47ce, 0, 0, 0x5a88, 0, 0x82ae, 0x4db0, 0, 0x4daf, 0, 0x82af, 0, 0,
    0x4819, 0x4c28, 0x47cf, 0x500b, 0x4831, 0, 0, 0, 0, 0x5a8c, 0x5a8d, 0, 0x5a8a, 0x47d0, 0x82b0, 0,
    0, 0, 0, 0x82b1, 0x82b2, 0x4898, 0x4a0f, 0x82b3, 0x5a89, 0, 0x5625, 0x5491, 0, 0, 0x82b4, 0,
    0, 0, 0, 0, 0, 0, 0x4808, 0, 0x6f5a, 0, 0, 0x4859, 0, 0, 0, 0x4db1,
    0, 0x4832, 0, 0x4803, 0, 0, 0, 0, 0, 0x5a92, 0, 0, 0x82b8, 0x82b9, 0, 0,
    0, 0x5a90, 0, 0x47d1, 0, 0, 0, 0x82ba, 0x561c, 0, 0x5a93, 0, 0x5a91, 0, 0, 0x5a8f,
    0x4f91, 0, 0, 0x47d2, 0, 0x5a8e, 0, 0x82bb, 0, 0x553a, 0, 0, 0, 0x82bc, 0, 0x4c44,
    0, 0, 0, 0, 0, 0x5a97, 0x5a98, 0, 0, 0, 0, 0, 0x4f0b, 0, 0, 0,
    0x5a94, 0x578c, 0, 0, 0, 0, 0x53ac, 0, 0, 0x5a96, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0x82bd, 0, 0, 0, 0, 0x4d07, 0, 0, 0, 0, 0,
    0, 0, 0x5a99, 0, 0, 0x82be, 0x54b8, 0x47d3, 0, 0, 0x5a9a, 0, 0x5a95, 0x47d4, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0x47d5, 0, 0, 0x82bf, 0, 0, 0, 0x47d6, 0x561b,
    0, 0, 0, 0, 0x47d7, 0, 0, 0, 0, 0, 0, 0x82c0, 0, 0, 0, 0,
    0, 0, 0x53be, 0, 0, 0, 0, 0, 0, 0, 0x5a9b, 0x5492, 0x82c1, 0, 0x47d8, 0x82c2,
    0x82c3, 0, 0x82c4, 0, 0, 0, 0, 0x47d9, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0x82c5, 0, 0x82c6, 0, 0x82c7, 0, 0, 0, 0, 0x82c8, 0, 0x5a9c, 0x5aa0, 0x5a9d, 0x82c9,
    0, 0x4927, 0x5a9f, 0, 0x47da, 0, 0, 0, 0, 0x4e1b, 0, 0x5a9e, 0x4bd9, 0, 0, 0,
    0x5aac, 0, 0, 0, 0, 0, 0x5aa5, 0x5aa2, 0, 0, 0x82ca, 0, 0x82cb, 0, 0, 0,
    0x82cc, 0x51c4, 0, 0x5aa1, 0, 0x82cd, 0x5aa3, 0, 0, 0x5aa4, 0, 0, 0, 0, 0x82cf, 0,
    0x82ce, 0, 0, 0, 0, 0x82d0, 0, 0, 0, 0, 0x5aa6, 0x5aa7, 0, 0, 0, 0,
    0x82d1, 0, 0, 0, 0, 0, 0, 0, 0x82d2, 0x4a52, 0, 0x5aa9, 0x5aa8, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0x5aaa, 0x82d3, 0, 0x47dc, 0, 0, 0, 0, 0, 0,
    0, 0, 0x4f4e, 0, 0, 0x47dd, 0, 0, 0, 0, 0x5aad, 0, 0x523c, 0x82d5, 0, 0,
    0x48a5, 0, 0x5aab, 0, 0x82d4, 0, 0x5aae, 0, 0, 0, 0, 0, 0, 0, 0x5aaf, 0,
    0x5ab2, 0x57b5, 0, 0x5ab0, 0, 0x5ab1, 0, 0, 0, 0, 0, 0, 0x82d6, 0, 0, 0,
    0x4db2, 0x5ab3, 0x82d7, 0, 0x4c86, 0x5ab4, 0x57b6, 0x4dda, 0x5118, 0, 0x5ab5, 0x5ab6, 0x4dba, 0x4c87, 0, 0x5632,
    0, 0, 0, 0x4a88, 0x4c29, 0x5ab7, 0x49b8, 0, 0x82d8, 0x5ab8, 0, 0x5119, 0, 0, 0, 0x82d9,
    0x5ab9, 0x5b03, 0, 0x5aba, 0, 0x5abb, 0, 0, 0x5abc, 0, 0x5abe, 0, 0x82da, 0x57b7, 0, 0x82db,
    0x5abf, 0x82dc, 0, 0x5ac0, 0x82dd, 0x5150, 0, 0x4887, 0x4e49, 0x4822, 0, 0x50b7, 0x4a10, 0x4e15, 0, 0x4c88,
    0, 0, 0, 0x57b8, 0, 0x52c6, 0x8401, 0x4e81, 0x4a11, 0x51c8, 0x524a, 0x4818, 0x4a99, 0x5555, 0, 0x4e22,
    0, 0, 0x4ab2, 0x504b, 0x4e1c, 0x5688, 0x5ac1, 0, 0, 0, 0, 0, 0x8402, 0, 0x4abc, 0,
    0x4d2b, 0, 0, 0x4992, 0x48c3, 0x4f0c, 0x4928, 0, 0x5ac2, 0x56a6, 0, 0, 0, 0, 0, 0x4ea9,
    0x8404, 0, 0x4e44, 0x5ac3, 0x4a53, 0x5332, 0x5609, 0x5ac4, 0, 0x5ac5, 0, 0, 0x54b9, 0, 0x8406, 0,
    0x5ac7, 0, 0x4a08, 0x4b57, 0x5ac6, 0, 0x8407, 0, 0x57b9, 0, 0, 0x4a12, 0, 0x4f92, 0x5acb, 0x4d81,
    0, 0x4929, 0x5aca, 0, 0x5ac8, 0x5acc, 0x5ac9, 0x538b, 0x5e2d, 0x4f93, 0, 0x5acd, 0x57ba, 0, 0x5720, 0,
    0x5ace, 0x840a, 0, 0x5ad0, 0, 0x51de, 0x5acf, 0, 0x5003, 0, 0x4ddb, 0, 0, 0x840b, 0x5130, 0x4e57,
    0, 0x54d5, 0x504c, 0x840d, 0x4e2d, 0x5ad1, 0x4f0d, 0x5ad2, 0x5ad3, 0x4833, 0x511a, 0x4fb2, 0, 0x5ad4, 0x5313, 0x4f0e,
    0, 0x4f0f, 0x57bb, 0x5ad5, 0, 0, 0x504d, 0, 0, 0, 0x4f10, 0, 0, 0, 0x57bc, 0,
    0x5ad6, 0, 0x5ad7, 0x57bd, 0x5640, 0, 0, 0, 0x5ad8, 0x840e, 0, 0x57be, 0, 0x4b26, 0, 0,
    0x840f, 0x4e82, 0, 0, 0, 0, 0, 0, 0x5ad9, 0x5ada, 0x4e3c, 0x4f8c, 0x5354, 0x4fb4, 0x5458, 0x5382,
    0x4b29, 0x5adb, 0, 0, 0, 0x4acf, 0x5adc, 0, 0x4b5e, 0, 0x532f, 0x4910, 0, 0x4db3, 0x5add, 0x5b02,
    0x5b01, 0x4b5d, 0, 0x5ade, 0, 0x5298, 0, 0, 0, 0, 0, 0x6f5b, 0, 0, 0x5110, 0x8411,
    0x52ab, 0x4e28, 0x57c0, 0x8412, 0x50b8, 0x56da, 0, 0x8413, 0x8414, 0x8415, 0, 0, 0x5b04, 0, 0x5b05, 0x5336,
    0x8416, 0x4d93, 0, 0, 0, 0, 0x5b07, 0, 0, 0x5b08, 0x57c4, 0, 0x8419, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0x841c, 0, 0x841d, 0, 0x5b09, 0, 0, 0x57c5,
    0x4a54, 0x5b0a, 0, 0, 0x5b0b, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x57c6,
    0x8421, 0x490c, 0x8422, 0x57c7, 0, 0, 0x8423, 0x8424, 0x509b, 0x4a44, 0x57c8, 0x5b0d, 0x5608, 0x8426, 0, 0,
    0, 0x5132, 0, 0x49b9, 0, 0x8427, 0x5b0f, 0x5b11, 0x4a3f, 0, 0x57c9, 0x5b0e, 0x5b10, 0, 0x5b13, 0,
    0, 0, 0, 0, 0, 0x5b12, 0, 0x5b14, 0, 0x8429, 0, 0x57ca, 0, 0, 0, 0,
    0x57cb, 0, 0x57cc, 0, 0, 0, 0, 0, 0, 0x5b15, 0, 0, 0, 0, 0, 0,
    0x531d, 0x4b0e, 0, 0, 0, 0, 0, 0, 0x4945, 0x5b16, 0x5b1b, 0, 0, 0x5b19, 0, 0x5557,
    0x5556, 0, 0, 0, 0x57cd, 0, 0x52c7, 0, 0, 0, 0x5b18, 0x4eb4, 0, 0x5b17, 0, 0,
    0, 0, 0, 0, 0, 0, 0x842c, 0x4fd2, 0, 0, 0, 0x5b1c, 0, 0x57d0, 0x4d4a, 0,
    0x842d, 0x5b22, 0, 0, 0x5b23, 0x5b1d, 0x4993, 0x5b1e, 0x5b27, 0x5b26, 0x5b25, 0x5b21, 0, 0x842f, 0, 0x5b20,
    0x8430, 0, 0x5b24, 0, 0x8431, 0, 0x8432, 0x57d1, 0, 0x5558, 0, 0x842e, 0, 0, 0, 0,
    0, 0x8433, 0, 0, 0, 0, 0, 0, 0, 0x8434, 0, 0, 0, 0, 0, 0,
    0, 0, 0x8435, 0, 0, 0, 0x57d3, 0x57d4, 0, 0, 0x57d6, 0x5b2b, 0x5b28, 0, 0x5b2a, 0,
    0x56d2, 0, 0x5b29, 0x57d5, 0, 0, 0, 0, 0, 0, 0, 0, 0x5b1f, 0, 0, 0,
    0, 0x8437, 0, 0, 0, 0, 0, 0, 0, 0x4fd3, 0x8438, 0, 0x5b2c, 0x57d7, 0, 0x4d17,
    0x843a, 0, 0, 0x5b2d, 0, 0, 0x5b2e, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0x57d8, 0x5b31, 0, 0x5b30, 0, 0, 0x5b2f, 0x843d, 0, 0, 0x52c8, 0x5b1a, 0, 0, 0,
    0x5b37, 0, 0x843f, 0, 0x8440, 0, 0, 0x8441, 0, 0x8442, 0, 0, 0, 0x5b33, 0, 0,
    0x57d9, 0, 0x5b32, 0, 0x57da, 0, 0, 0x57db, 0, 0, 0, 0, 0x5b34, 0, 0x5b35, 0,
    0x8443, 0, 0x8444, 0, 0x8445, 0, 0, 0x5b38, 0x57dc, 0x8447, 0x5746, 0, 0x5b39, 0x5b36, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0x5b3a, 0, 0x57dd, 0x4a40, 0x5b3b, 0, 0,
    0, 0x8448, 0x5b3d, 0x5b3c, 0, 0, 0x5b3e, 0x8449, 0x844a, 0, 0, 0x5b3f, 0, 0x504e, 0x4e83, 0,
    0x844b, 0x4ec4, 0x6a08, 0x50c3, 0x844d, 0x4c89, 0x4d18, 0x4c8a, 0x4ad0, 0x844e, 0, 0x5b40, 0, 0, 0x4d19, 0,
    0, 0x4c2a, 0x5b41, 0x5606, 0x53a3, 0x5b42, 0, 0x4c8b, 0, 0, 0, 0x4a0c, 0, 0x5187, 0x4b32, 0,
    0x8450, 0, 0x4db4, 0x54bb, 0, 0, 0x5421, 0, 0, 0, 0, 0x5b43, 0x4a55, 0, 0, 0,
    0, 0x5b46, 0x8452, 0, 0x6a09, 0x8453, 0x5201, 0, 0x6a0a, 0x5b45, 0x5b44, 0x5b47, 0, 0x524b, 0, 0x8455,
    0, 0, 0, 0, 0, 0x4fc3, 0, 0, 0, 0, 0, 0x4db5, 0, 0x502a, 0x8456, 0x5133,
    0x4a82, 0, 0, 0x5202, 0, 0, 0x5b48, 0x5b49, 0x4f4f, 0, 0, 0, 0, 0x5599, 0x8457, 0,
    0x5b4c, 0, 0, 0x5b4b, 0x5b4a, 0x54dd, 0, 0x5b53, 0, 0x8458, 0, 0, 0x55ba, 0, 0x5b4d, 0,
    0, 0, 0, 0, 0x5b4f, 0x55cb, 0x845a, 0x5b4e, 0x6a0b, 0, 0, 0, 0, 0, 0x6a0c, 0x5b50,
    0, 0x5408, 0x5b51, 0x551e, 0x5b52, 0, 0, 0, 0, 0, 0, 0x845c, 0x845d, 0x845e, 0x8601, 0,
    0, 0, 0x4a13, 0x551f, 0x538f, 0x5b54, 0x5b55, 0x6f5c, 0x4c8c, 0x4a14, 0x5b56, 0x4c18, 0x56a4, 0x5689, 0x4a56, 0x5b58,
    0, 0x5203, 0, 0x4c8d, 0x4f11, 0, 0, 0x543f, 0, 0, 0x4f12, 0, 0, 0, 0, 0x4ed8,
    0, 0, 0, 0, 0, 0x524c, 0x5559, 0x5299, 0, 0, 0x4c8e, 0, 0x54bc, 0, 0, 0,
    0x5b59, 0, 0, 0, 0, 0x8603, 0x52b9, 0x4d22, 0, 0, 0x8604, 0x4c2b, 0x8605, 0x524d, 0, 0,
    0, 0, 0, 0, 0, 0x4823, 0x4ece, 0x4c8f, 0x56a7, 0x8606, 0, 0, 0, 0, 0x6a0d, 0x8607,
    0, 0x5b5a, 0x5b5b, 0x53b1, 0, 0, 0x8608, 0, 0x5b5c, 0x5757, 0x578d, 0x6a0f, 0, 0, 0, 0x5b5e,
    0x5b5d, 0, 0x8609, 0x49a7, 0, 0, 0x5b81, 0, 0, 0x860a, 0x5b84, 0x5b85, 0, 0x5b83, 0, 0x54a0,
    0x4f13, 0x5b87, 0x5b86, 0x5b82, 0, 0, 0, 0, 0x5b88, 0x5b89, 0, 0, 0x5b8a, 0, 0, 0,
    0x5b8d, 0x5b8b, 0, 0x5b8c, 0x5b8e, 0, 0x48c4, 0x524e, 0x5b8f, 0x6a10, 0x4bda, 0x4956, 0x5396, 0x860c, 0x5b90, 0x535b,
    0x6a11, 0x553b, 0x6a12, 0x5b91, 0x578e, 0, 0, 0x6a13, 0x860d, 0x5b92, 0x5520, 0x5b95, 0x5801, 0x5811, 0x860e, 0x4e10,
    0x5355, 0x5b96, 0, 0x4abd, 0x5204, 0x485a, 0x5b97, 0x5506, 0x4c90, 0, 0, 0x51b0, 0x860f, 0x6a14, 0x8611, 0x524f,
    0, 0, 0, 0x6a15, 0, 0x564f, 0x4c19, 0x4c2c, 0, 0x5b98, 0, 0, 0, 0x5b99, 0, 0x5b9f,
    0, 0x4e45, 0, 0, 0x6a16, 0x5205, 0x6a17, 0x4b0f, 0x5b9a, 0, 0, 0, 0x548b, 0x6a18, 0x51a6, 0,
    0x6a19, 0x5b9b, 0, 0, 0, 0x6a1a, 0, 0x8612, 0x5b9c, 0, 0x4b10, 0, 0x5b9d, 0, 0x5b9e, 0,
    0, 0x5ba0, 0, 0x52d6, 0x6a1b, 0, 0x5ba1, 0x5ba2, 0x6a1c, 0x5ba3, 0, 0, 0x5b94, 0x5b93, 0, 0,
    0, 0x5ba4, 0x4ba1, 0x8613, 0x6a1d, 0, 0x5487, 0x6a1e, 0, 0x4d2c, 0x5497, 0x5206, 0x54ab, 0x5ba5, 0, 0,
    0x4f14, 0x48a6, 0x8614, 0x5ba6, 0, 0, 0, 0x5ba7, 0, 0x5652, 0, 0, 0x5440, 0x6a1f, 0x8615, 0x5baa,
    0x48dd, 0x500c, 0x5ba9, 0x5ba8, 0x4ba2, 0x5134, 0, 0x5bae, 0x5bac, 0x6a20, 0x5bab, 0x5707, 0x4c45, 0, 0, 0x8616,
    0x4ed9, 0x5bad, 0x52ac, 0x4e9e, 0, 0, 0, 0x5320, 0x5bb1, 0x5bb0, 0, 0, 0x6a21, 0, 0x5baf, 0,
    0x5bb2, 0x4c46, 0x8617, 0, 0x8618, 0, 0, 0x6a22, 0x5bb3, 0x54dc, 0x4ebb, 0, 0, 0x5bb4, 0x5459, 0x6a23,
    0, 0, 0, 0x5321, 0x5207, 0x6a24, 0, 0x6a25, 0x8619, 0x5290, 0, 0, 0x5bb5, 0x4a8b, 0, 0,
    0, 0, 0, 0x4f94, 0x861a, 0x548c, 0, 0x861c, 0, 0x6a26, 0, 0x861d, 0x4a57, 0x5386, 0, 0,
    0, 0, 0x861e, 0x861f, 0x8620, 0, 0x5bb6, 0x4db6, 0x559a, 0x559b, 0, 0, 0x48de, 0x5bbb, 0x6a27, 0,
    0x51c9, 0x6a28, 0x8621, 0, 0x5bb8, 0, 0, 0, 0, 0x6a29, 0, 0x4957, 0, 0, 0x8622, 0x8623,
    0x5c0d, 0x5bba, 0, 0x8624, 0, 0x5390, 0, 0, 0x5bb9, 0, 0, 0x5bb7, 0x8625, 0x4cda, 0, 0x5bbd,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x6a2a, 0x5bc3, 0x5bc9,
    0x5bc1, 0, 0x52bc, 0, 0x6a2b, 0x5bc6, 0x54bd, 0x8627, 0x6a2c, 0x5bc0, 0, 0x5bc5, 0x5747, 0x4db7, 0, 0,
    0x5135, 0x5bbe, 0x8628, 0, 0x8629, 0x4abe, 0x5bc8, 0x500d, 0x48c5, 0x5bc2, 0x4958, 0x5bc7, 0, 0, 0, 0x4b11,
    0, 0x5bc4, 0, 0x6a2d, 0, 0x6a2e, 0, 0, 0, 0, 0x5bca, 0, 0, 0, 0, 0,
    0, 0x5bcc, 0x5bd6, 0x5bd4, 0, 0, 0x5bd1, 0x6a2f, 0, 0, 0x5bd0, 0x5758, 0x862b, 0x5bd2, 0, 0,
    0x4b12, 0, 0x4c91, 0, 0, 0x4eda, 0, 0, 0, 0x5bd9, 0x5bcb, 0, 0, 0, 0, 0x5bcf,
    0x5bbf, 0, 0x495a, 0x5bd3, 0x5bd5, 0x51b1, 0, 0, 0x4d08, 0x4918, 0x5bcd, 0x5bd8, 0x5bd7, 0x4b13, 0, 0x5109,
    0x49c6, 0, 0, 0, 0, 0x4ba3, 0, 0x5bce, 0, 0, 0, 0, 0, 0, 0, 0x862c,
    0, 0x5bda, 0, 0x5bdd, 0x5c01, 0, 0, 0, 0, 0x4e1d, 0x862d, 0x5c07, 0x5250, 0x5bdb, 0, 0,
    0, 0, 0x5c05, 0, 0x4959, 0x862e, 0x5c03, 0x5c04, 0, 0, 0x5bde, 0x5c02, 0, 0x6a31, 0x6a32, 0x4c47,
    0x568a, 0, 0, 0x4a15, 0, 0, 0x48b9, 0x5c06, 0x862f, 0x539a, 0x480d, 0, 0, 0, 0, 0,
    0x8631, 0x8632, 0x5441, 0x5bbc, 0x5c0c, 0x5c10, 0x5645, 0, 0x5c09, 0, 0, 0, 0x52c9, 0x5c0e, 0x8633, 0,
    0, 0, 0, 0, 0, 0x4f50, 0x5c0f, 0x5337, 0x8634, 0, 0, 0x6a33, 0, 0, 0, 0,
    0, 0x57a7, 0, 0x5c0b, 0x6a34, 0x6a35, 0, 0, 0x5c11, 0x8635, 0x4cdb, 0x8636, 0x502b, 0x6a36, 0, 0x4834,
    0x5c0a, 0x5c08, 0, 0x50ba, 0, 0, 0, 0x5bdc, 0x4d94, 0, 0, 0, 0, 0, 0x8637, 0,
    0x5126, 0x5c1d, 0x8638, 0x50bb, 0x5c18, 0x8639, 0x5c15, 0x5c16, 0x6a37, 0x4e46, 0x5c19, 0x5c1c, 0, 0, 0, 0,
    0x5c17, 0x4e85, 0, 0x5c1a, 0, 0, 0x5c14, 0, 0x565c, 0x565b, 0, 0, 0, 0x5c1e, 0x5c1f, 0x4835,
    0x863a, 0, 0x863b, 0x863c, 0, 0x5c13, 0, 0, 0, 0x863d, 0x4b52, 0x4806, 0x6a38, 0, 0x863e, 0x4a16,
    0, 0x5c1b, 0, 0, 0, 0, 0, 0x5c23, 0x5c22, 0, 0, 0x6a39, 0x5c27, 0, 0, 0,
    0x6a3a, 0, 0, 0, 0x5c28, 0, 0, 0x6a3b, 0, 0, 0x863f, 0, 0x5c26, 0x5c29, 0x5c21, 0x5c25,
    0, 0x8641, 0x5c2a, 0, 0x5c2b, 0, 0x8642, 0x5c20, 0x4ddc, 0, 0x5c24, 0x5136, 0x4c92, 0x5c12, 0x4f95, 0,
    0, 0, 0, 0x5c38, 0, 0x5549, 0, 0, 0x5c2e, 0x5c2f, 0x5c30, 0, 0, 0x5c37, 0, 0x5c36,
    0x8643, 0, 0x55dd, 0x4a17, 0, 0x5c34, 0, 0x4ba5, 0x4994, 0, 0, 0x5c31, 0, 0, 0x5718, 0x5c33,
    0x4836, 0x5c35, 0, 0x5c2c, 0x5c32, 0x5c39, 0x4ba4, 0x5c2d, 0, 0, 0, 0, 0x8644, 0, 0x56bd, 0,
    0, 0, 0x568b, 0, 0, 0, 0, 0x5c3c, 0, 0, 0x5c40, 0, 0, 0x6a3d, 0x50de, 0,
    0x5759, 0x5c41, 0x8646, 0x8647, 0x5c3e, 0, 0x5c3b, 0x8648, 0x8649, 0x5c3a, 0x5c3f, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0x5510, 0x864a, 0, 0x5314, 0x864b, 0x4ba6, 0, 0x5c42, 0x5c3d, 0x864c, 0x5c43, 0,
    0, 0, 0x4bdb, 0, 0, 0, 0x4911, 0, 0, 0x6a40, 0x5c4b, 0, 0x6a3f, 0, 0x4a18, 0,
    0, 0, 0, 0x5c49, 0, 0, 0x5c4a, 0x4d09, 0x5c48, 0x5c46, 0x5c45, 0x5c4c, 0x5c44, 0x5c4e, 0, 0,
    0x495b, 0, 0, 0, 0, 0x864e, 0, 0, 0, 0, 0, 0, 0, 0x864f, 0, 0x8650,
    0, 0, 0, 0x5c50, 0, 0, 0x5c4f, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x5208, 0, 0x5c53, 0x8651, 0x5c51, 0x5c47, 0x4bdc, 0, 0x5c52, 0, 0x5c56, 0x5c55, 0x5c57, 0x5c54,
    0x5c58, 0, 0, 0, 0, 0, 0, 0, 0x5c59, 0x5c5a, 0x554a, 0, 0x5c5c, 0x5c5b, 0x4e9f, 0,
    0x500e, 0x4946, 0x495c, 0, 0x5c5d, 0x8653, 0x481f, 0, 0, 0, 0x502c, 0x5c5e, 0, 0x6623, 0x5c81, 0x4bc1,
    0, 0x5c82, 0x6a42, 0x8654, 0, 0, 0x504f, 0, 0, 0x8655, 0x5c83, 0, 0, 0, 0x5c84, 0x4a9a,
    0x5c85, 0, 0x5c86, 0x5c87, 0x5137, 0, 0, 0, 0x4c2d, 0, 0, 0x5641, 0, 0, 0x6a43, 0x559c,
    0x4eca, 0x5c88, 0, 0x6a44, 0, 0, 0x8656, 0x5050, 0x671d, 0x5442, 0, 0x4e4a, 0x8657, 0x4d2d, 0x5c89, 0,
    0, 0x8658, 0x8659, 0x5127, 0, 0x5507, 0x6a45, 0, 0x5151, 0, 0x6a46, 0x5c8c, 0, 0, 0x5c8a, 0,
    0x5c8d, 0x865a, 0, 0x5c8b, 0x865b, 0, 0, 0, 0x5c8e, 0, 0, 0, 0, 0x865d, 0x5511, 0x6a47,
    0, 0x4817, 0, 0x865e, 0, 0, 0x54be, 0, 0, 0x5443, 0, 0x865c, 0x5c8f, 0, 0x5c92, 0x4f15,
    0x4a9b, 0, 0x5c90, 0x5c97, 0x4f16, 0x6a48, 0, 0, 0, 0x5c91, 0x53a4, 0, 0, 0, 0, 0,
    0, 0x56be, 0x5c93, 0x5c94, 0x5c98, 0x52ca, 0x5c95, 0x4c93, 0x503e, 0x8681, 0, 0x5ca6, 0x5414, 0, 0x5152, 0,
    0, 0, 0, 0, 0, 0, 0x8682, 0, 0, 0, 0, 0x5444, 0x5d0d, 0, 0, 0,
    0, 0x555a, 0, 0, 0, 0x5251, 0, 0, 0, 0x55d5, 0, 0x5c9b, 0x4901, 0x51ca, 0, 0,
    0, 0, 0x5ca4, 0, 0x6a49, 0x5194, 0x5c9e, 0x5ca5, 0x5ca0, 0x5ca7, 0x5ca3, 0, 0x5ca2, 0x53cf, 0, 0x5c9c,
    0x495d, 0x5c9a, 0x4ad1, 0x5153, 0x5c96, 0x8683, 0x6a4a, 0x5c99, 0x4c94, 0x503b, 0, 0x4f17, 0x5ca1, 0x53b2, 0, 0,
    0x4ad2, 0x49a8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x49c7, 0x4f81, 0x5ca9, 0x5cae,
    0, 0x5caa, 0, 0x4bdd, 0, 0x5caf, 0x4d82, 0x4cc9, 0, 0, 0, 0, 0x6a4b, 0x8685, 0x4e86, 0x5c9d,
    0, 0x4ddd, 0x5cac, 0x8686, 0, 0, 0, 0x4db8, 0x5cad, 0x4824, 0x6a4c, 0, 0x5ca8, 0x8687, 0, 0,
    0x8688, 0x5209, 0, 0, 0, 0, 0, 0, 0x6a4d, 0x4ad3, 0, 0, 0, 0, 0, 0x4b14,
    0, 0, 0, 0, 0, 0, 0, 0x5cab, 0x4807, 0, 0, 0x4d23, 0, 0, 0, 0x4f96,
    0, 0, 0x868b, 0, 0, 0x868c, 0, 0, 0, 0x6a4e, 0x5252, 0x868d, 0x868e, 0x5434, 0x5cb1, 0x50be,
    0, 0x868f, 0, 0x6a4f, 0x8690, 0, 0, 0, 0, 0x510a, 0, 0, 0x4d8b, 0x5cb2, 0x8691, 0x5cb4,
    0x5cb0, 0, 0, 0, 0, 0x5541, 0, 0x521d, 0, 0x8693, 0, 0, 0x50bc, 0, 0, 0,
    0, 0, 0, 0, 0, 0x6a50, 0, 0x555b, 0x4e2e, 0x5cc0, 0, 0x5cbf, 0x8696, 0, 0x4fd8, 0,
    0, 0, 0x4bde, 0, 0, 0, 0x5cb9, 0x4f19, 0, 0, 0x5348, 0x5391, 0x6a51, 0, 0, 0,
    0x5cb7, 0, 0, 0x50bd, 0x8697, 0, 0, 0, 0x4e58, 0x5cbc, 0, 0, 0x4f18, 0, 0x5cb6, 0x5cbb,
    0, 0, 0x53b3, 0, 0x869a, 0, 0x5cb5, 0, 0x4b81, 0x8698, 0, 0x49bd, 0, 0, 0, 0x5cbd,
    0x570b, 0x4d2e, 0x5195, 0x5cba, 0, 0x503c, 0, 0x4c95, 0x4fc4, 0x48c6, 0x509c, 0x5cb8, 0x4aa5, 0, 0, 0,
    0, 0, 0x4ba7, 0, 0x522f, 0x5cbe, 0, 0, 0, 0, 0, 0x50bf, 0, 0x869b, 0x5cc1, 0,
    0x5cc3, 0, 0, 0x5117, 0x5cc9, 0, 0x5cc4, 0, 0, 0x5cc6, 0, 0, 0, 0, 0, 0x54a1,
    0x5253, 0, 0x5cc7, 0, 0x869d, 0x869e, 0x568c, 0, 0, 0, 0x56a8, 0x4a19, 0x869f, 0, 0, 0,
    0x86a0, 0x480e, 0, 0x5cc5, 0, 0x6a52, 0, 0, 0, 0x5cc2, 0, 0x86a1, 0x86a2, 0x6a53, 0x4a58, 0,
    0, 0, 0x86a3, 0, 0x48c7, 0x6a54, 0x5cc8, 0x869c, 0, 0, 0x56a9, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0x5ccc, 0, 0, 0x86a4, 0, 0, 0, 0x511b, 0, 0x5cd3,
    0x6a55, 0, 0, 0x5ccd, 0x6a56, 0, 0x5cca, 0x5cd1, 0, 0, 0, 0, 0x5cb3, 0, 0x86a5, 0,
    0, 0, 0x6a57, 0, 0, 0x86a6, 0x5cce, 0, 0x5cd2, 0x86a7, 0, 0, 0x5422, 0x52cb, 0, 0x86a8,
    0, 0, 0, 0, 0x5ccb, 0, 0x5ccf, 0, 0, 0, 0x4ba8, 0, 0, 0, 0x4d51, 0,
    0, 0, 0x503d, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x5cd7, 0,
    0, 0x6a59, 0, 0, 0, 0, 0, 0, 0x5286, 0, 0x86a9, 0x86aa, 0, 0x86ab, 0, 0,
    0x6a5a, 0, 0, 0, 0, 0, 0, 0x5cd4, 0, 0x55c0, 0, 0, 0, 0x6a5b, 0, 0x5cd5,
    0, 0, 0, 0x86ac, 0, 0, 0x5cd6, 0, 0x562e, 0x6a58, 0x5002, 0, 0, 0x86ad, 0, 0,
    0, 0, 0, 0x4bc2, 0, 0, 0, 0x86ae, 0x5cdd, 0, 0, 0, 0, 0, 0, 0,
    0, 0x86af, 0x4d95, 0x5cda, 0, 0x5cd9, 0, 0, 0, 0, 0x5392, 0, 0, 0x86b0, 0x5315, 0x86b1,
    0, 0, 0, 0, 0x5291, 0x5cdb, 0, 0, 0, 0x5cdc, 0, 0x54cf, 0, 0x53a5, 0x4d83, 0,
    0x5051, 0, 0x55b0, 0, 0, 0, 0, 0, 0, 0x49a9, 0, 0x5d05, 0x5cde, 0, 0x6a5d, 0x6a5e,
    0, 0x56aa, 0x5d07, 0, 0x6a81, 0x5d03, 0, 0x5d04, 0, 0, 0x6a82, 0x86b2, 0x86b3, 0x50c0, 0x6a5c, 0,
    0x6a83, 0, 0x5d02, 0, 0x5c9f, 0x86b4, 0, 0x86b5, 0x5d06, 0, 0x5d01, 0, 0, 0, 0, 0,
    0x5d0b, 0x5d0c, 0x5287, 0x5d0e, 0x86b7, 0x86b8, 0x4d84, 0x5d09, 0, 0, 0, 0, 0x4a9c, 0, 0, 0x5d0f,
    0, 0x5d08, 0x5d13, 0, 0x5d12, 0, 0x5d11, 0x6a84, 0, 0, 0x5d14, 0x6a85, 0, 0x5d16, 0x4f51, 0x86b9,
    0x5d15, 0, 0, 0, 0x86ba, 0x5d19, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x86bc,
    0, 0, 0, 0, 0x86bd, 0, 0x86be, 0, 0x5d17, 0, 0, 0, 0x5d18, 0x5cd0, 0x86c0, 0,
    0, 0, 0x6a86, 0x5d1b, 0x5d1a, 0, 0, 0, 0, 0x6a87, 0x5cd8, 0x5d1c, 0x5d10, 0, 0, 0x4db9,
    0, 0, 0x86c1, 0, 0x5d1d, 0x5d1e, 0x5d20, 0x5d1f, 0x5d21, 0x495e, 0, 0x4c96, 0, 0, 0x555c, 0x500f,
    0, 0, 0, 0, 0x86c2, 0x4c2e, 0, 0, 0x5d23, 0, 0, 0, 0, 0x5d26, 0, 0x54b2,
    0, 0x4abf, 0, 0, 0x86c3, 0x5d25, 0x5d24, 0x53b4, 0x5d27, 0x4b15, 0, 0, 0, 0x5d29, 0x5d28, 0,
    0, 0, 0x4a1a, 0x4d96, 0, 0, 0x5338, 0x6a89, 0, 0, 0, 0x86c4, 0x4ba9, 0, 0, 0,
    0x4fd4, 0, 0x5d2a, 0, 0x5010, 0x5288, 0, 0x54bf, 0x5d2b, 0, 0x86c5, 0, 0, 0, 0, 0,
    0, 0x86c6, 0x5d2c, 0x5d2d, 0x86c7, 0x86c8, 0, 0x5518, 0x5abd, 0x5026, 0x86c9, 0, 0x54ac, 0, 0x4d38, 0,
    0x5445, 0x5423, 0, 0, 0, 0, 0, 0x52ad, 0, 0x5721, 0, 0x5d2f, 0x4e30, 0x6a8a, 0, 0x5d30,
    0, 0x4816, 0, 0, 0x4b34, 0x502d, 0, 0x54c0, 0, 0, 0, 0x5d31, 0x4da2, 0x51a7, 0, 0x4dbb,
    0x4f97, 0, 0x86ca, 0, 0, 0x86cb, 0, 0x5d32, 0x86cc, 0x555d, 0, 0, 0x48d7, 0x4dbc, 0, 0x86cd,
    0, 0x5d35, 0x86ce, 0x5d33, 0x5d36, 0x5719, 0x5d34, 0, 0, 0x86cf, 0, 0x505b, 0x5d37, 0, 0, 0x5112,
    0, 0, 0x5d38, 0, 0x86d0, 0, 0, 0x4a5a, 0, 0x5d3a, 0, 0x5d39, 0, 0, 0, 0,
    0x5d3b, 0x5d3c, 0x4a5b, 0, 0, 0x535c, 0x5196, 0x4acc, 0x4dbd, 0x50c1, 0, 0, 0x4ebc, 0x4810, 0, 0,
    0, 0x5d3d, 0x86d2, 0, 0, 0, 0, 0, 0, 0x86d3, 0x4902, 0x5d41, 0x86d4, 0, 0, 0,
    0x6a8c, 0, 0x4c97, 0x5d40, 0x86d5, 0, 0x4d0b, 0x4f1a, 0x86d6, 0x6a8d, 0x5d3f, 0, 0x4f1b, 0, 0x5620, 0x4d0a,
    0, 0, 0, 0x4837, 0x502e, 0x6a8e, 0, 0, 0, 0, 0, 0, 0x5d46, 0, 0x6a8f, 0x5011,
    0x48a7, 0x86d7, 0x6a91, 0, 0x6a92, 0x4eb5, 0, 0x55c6, 0x4d52, 0, 0x86d8, 0x6a93, 0, 0x4f1c, 0, 0x5007,
    0x6a94, 0x6a95, 0, 0x6a96, 0x5d45, 0x5d43, 0x5d44, 0, 0, 0, 0x6a90, 0, 0x51cb, 0, 0, 0x5d86,
    0, 0x5d4a, 0x4dde, 0x4c98, 0x5d48, 0x86d9, 0, 0, 0x6a98, 0x5d49, 0, 0x4f98, 0x6a99, 0, 0x86db, 0x5d47,
    0, 0x86da, 0x4d8f, 0, 0, 0, 0, 0x86de, 0, 0x6a9b, 0x6a9c, 0x8701, 0, 0x5d4c, 0x5d4b, 0x5d50,
    0, 0x6a9d, 0x5d51, 0x8702, 0x5d4d, 0x6a9e, 0x4982, 0x5d4e, 0x5d4f, 0x5435, 0x8705, 0x8706, 0x8707, 0x8708, 0x54c1, 0x4baa,
    0x5d52, 0, 0, 0x6a9f, 0x5012, 0, 0x4f1d, 0x6aa0, 0x6aa1, 0, 0x51b2, 0x8709, 0, 0, 0, 0,
    0x870a, 0x4b27, 0, 0x5d53, 0x5d57, 0, 0, 0x492b, 0x5d54, 0x5d56, 0, 0, 0, 0x6aa2, 0x5d55, 0,
    0x870b, 0x4ecb, 0x870c, 0, 0, 0, 0x51a8, 0x4825, 0x5d58, 0x870d, 0, 0, 0, 0x5d59, 0, 0,
    0x6aa4, 0, 0x520a, 0, 0, 0, 0x5751, 0, 0, 0, 0, 0x4da3, 0, 0x870f, 0x554b, 0,
    0, 0x8710, 0x6aa5, 0, 0x559d, 0x8711, 0, 0, 0x5d82, 0x5d5b, 0, 0x6aa6, 0x5d5e, 0, 0x5d5d, 0x8713,
    0, 0x5d5a, 0, 0, 0x5d81, 0, 0x6aa7, 0x533e, 0x6aa8, 0x5d5c, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0x5d83, 0, 0, 0x4ecc, 0x5d84, 0x6aaa, 0x56ab, 0x53d8, 0, 0,
    0x5d85, 0, 0, 0, 0, 0, 0x5d87, 0, 0x6aab, 0x5d88, 0, 0, 0x8715, 0, 0, 0,
    0x5d89, 0, 0x4b2a, 0x48a8, 0x4c99, 0x5d8a, 0, 0x5d8b, 0x4ed1, 0x50c2, 0x6aac, 0x6a97, 0x5938, 0x509e, 0x509d, 0x5138,
    0x4d27, 0x8717, 0, 0x5852, 0, 0x8718, 0, 0, 0x4bce, 0x568d, 0, 0x555e, 0, 0x54de, 0, 0x5d8c,
    0, 0, 0x8719, 0x6aad, 0x4d53, 0x521f, 0x5d8d, 0x578f, 0, 0x871b, 0, 0x559e, 0, 0x520b, 0x5d8e, 0x4a5c,
    0, 0, 0, 0, 0, 0, 0x5d8f, 0x5d90, 0x563a, 0, 0x5604, 0x55d6, 0x55bc, 0x4d85, 0x5d92, 0,
    0, 0x4e4b, 0, 0x6aaf, 0x55b1, 0, 0x5d94, 0x5d97, 0x5d96, 0, 0x4a59, 0, 0, 0x4ac0, 0, 0x5d93,
    0, 0x5d95, 0, 0, 0, 0, 0x5d98, 0x6ab1, 0x6ab2, 0x4fd9, 0, 0, 0x871e, 0x871f, 0x56db, 0x4829,
    0x4d40, 0x511c, 0, 0x4e3d, 0x8720, 0, 0x4f53, 0, 0, 0x5d9b, 0, 0, 0x52ae, 0x8721, 0x5d99, 0x510b,
    0x5d9a, 0x4f52, 0x563d, 0x5d9c, 0x5d9d, 0x56c8, 0x6ab0, 0, 0, 0, 0x5da2, 0, 0, 0x4c9a, 0, 0x53b5,
    0x5d9f, 0x52cc, 0x5d3e, 0x5d42, 0x8725, 0x4aaf, 0x8726, 0x53a7, 0, 0, 0, 0x6ab3, 0x5da1, 0, 0x4f1e, 0x5424,
    0, 0x6ab4, 0, 0, 0, 0x5da7, 0, 0x545a, 0, 0x5d9e, 0, 0x5da4, 0x5da3, 0, 0, 0,
    0x502f, 0, 0x8728, 0x6ab5, 0, 0x55cd, 0, 0x5733, 0x6ab6, 0, 0x55c7, 0x6ab7, 0x492c, 0x4dbe, 0, 0,
    0x57a8, 0x5da6, 0x4fd5, 0, 0, 0, 0x5da5, 0, 0, 0x5da0, 0, 0, 0, 0, 0, 0x4c2f,
    0x872c, 0, 0x872d, 0x5dac, 0x5daa, 0, 0x492d, 0x5da8, 0x5dae, 0x5db4, 0, 0x6ab8, 0, 0, 0, 0,
    0x6aba, 0x5128, 0, 0x872e, 0x5521, 0, 0x5db6, 0, 0x872f, 0, 0x5482, 0, 0, 0, 0x5db5, 0x53d0,
    0x559f, 0x4a1b, 0x8730, 0x5057, 0x4ea0, 0, 0, 0x6abb, 0x5233, 0x8731, 0x568e, 0x8732, 0, 0x5db1, 0x5db0, 0,
    0, 0, 0x5db2, 0, 0x5daf, 0, 0, 0x5db7, 0, 0x5dad, 0, 0, 0x5dab, 0, 0x5db3, 0x5da9,
    0x8733, 0x51cc, 0, 0x5658, 0x4e26, 0x4d54, 0, 0x8734, 0, 0x6ab9, 0, 0x4d1a, 0x6abc, 0, 0x55cf, 0x49a1,
    0, 0x6abd, 0x522e, 0x532a, 0x48a9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0x872b, 0, 0, 0x5052, 0, 0, 0x5014, 0x4b8a, 0x8738, 0, 0, 0, 0, 0x6abf, 0x5db9, 0x8739,
    0, 0x4c9b, 0x49dc, 0, 0, 0, 0, 0, 0, 0x5dbb, 0x49d4, 0x5dc1, 0x6ac0, 0x873a, 0, 0,
    0, 0x6ac1, 0x5dbe, 0x873c, 0x5053, 0, 0, 0, 0x49ab, 0x4d0c, 0, 0x873d, 0x49aa, 0x4d2f, 0x873e, 0,
    0x5dbc, 0x4bc5, 0x4bab, 0x52cd, 0x873f, 0x8740, 0x5dba, 0, 0x4826, 0x8741, 0, 0, 0x8742, 0x5dbd, 0x5dbf, 0,
    0x4b2d, 0x4b8c, 0x6abe, 0x4a1c, 0x4aab, 0x8743, 0, 0x8744, 0, 0x5dc2, 0, 0x6ac2, 0x4d59, 0x55d1, 0, 0x4d97,
    0, 0, 0, 0x5dc3, 0, 0, 0, 0x5490, 0, 0, 0, 0x8746, 0, 0, 0x8747, 0,
    0, 0, 0x6ac3, 0, 0x5dcf, 0x6ac4, 0x4913, 0x5dc4, 0, 0, 0x8748, 0, 0x8749, 0, 0x5dd5, 0x5dc5,
    0, 0x5722, 0x874a, 0x5dcc, 0, 0x53bf, 0, 0, 0, 0, 0, 0, 0, 0x5dd4, 0, 0x5dc7,
    0x874b, 0, 0, 0x4814, 0x5dc9, 0, 0x874c, 0x4c9c, 0x874e, 0x874f, 0x8750, 0x5dcb, 0x8751, 0x5dca, 0, 0x5dc6,
    0x5dd1, 0, 0x4f1f, 0x6ac6, 0, 0x6ac7, 0x5a4d, 0x4c48, 0x56dc, 0, 0x8752, 0x8753, 0, 0x5dc8, 0, 0x5254,
    0x4983, 0x4d0d, 0x6ac8, 0x5dc0, 0x8754, 0x5dd0, 0x49c1, 0, 0, 0x5dce, 0x5dd2, 0x8755, 0x52ce, 0, 0, 0,
    0, 0, 0, 0x875a, 0x4a5e, 0x875b, 0x5e12, 0, 0x6ac9, 0x5629, 0x5dd7, 0x4a5d, 0x875c, 0x5dde, 0, 0x875d,
    0x6aca, 0, 0x55a0, 0, 0x5e01, 0x5e03, 0x875e, 0x5e07, 0x5dd9, 0x8781, 0x518a, 0, 0, 0, 0, 0x52cf,
    0x5e0b, 0x5ddc, 0, 0x5e08, 0x8782, 0x8783, 0, 0x5e02, 0x6acb, 0, 0, 0, 0x8784, 0x6acc, 0x4f99, 0x5e0c,
    0x6acd, 0x6ace, 0x5013, 0, 0, 0, 0, 0x8785, 0, 0x5e0a, 0x4a1d, 0x8756, 0x6acf, 0, 0, 0,
    0x57b0, 0x5dd6, 0, 0x8786, 0x5e06, 0x4838, 0, 0x8787, 0x5dd8, 0, 0x6ad0, 0x561a, 0x5ddd, 0x4f82, 0x5227, 0x5dd3,
    0, 0, 0x5e05, 0, 0, 0, 0, 0, 0, 0x4fda, 0x5e0f, 0x49d1, 0x4c01, 0, 0, 0,
    0, 0x5e11, 0x5dda, 0x5e10, 0, 0x5e09, 0x5ddb, 0, 0x5e0d, 0, 0x5e0e, 0, 0, 0, 0, 0,
    0x5e1f, 0, 0, 0, 0x532e, 0x6ad3, 0x5e04, 0, 0, 0x5e1b, 0, 0x878b, 0, 0x5e1d, 0, 0x5238,
    0, 0, 0x6ad4, 0, 0, 0, 0x878d, 0, 0, 0x6ad1, 0x56ac, 0, 0, 0, 0, 0,
    0, 0, 0, 0x54d6, 0x5e18, 0x512a, 0, 0x6ad5, 0, 0x5e1e, 0x509f, 0, 0x5e15, 0x5e22, 0x5e21, 0,
    0x534f, 0x5e20, 0x534a, 0x6ad6, 0x6ad7, 0, 0, 0, 0x6ad8, 0x878e, 0x5e24, 0x5e17, 0x878f, 0x4b28, 0x5e1a, 0x4ebd,
    0, 0, 0x8790, 0x53c0, 0x5e1c, 0x4b2b, 0, 0x5e14, 0x5e16, 0x5e13, 0x8791, 0, 0x5790, 0x49ba, 0x5e19, 0x8792,
    0x6ad9, 0x5e23, 0x4995, 0, 0, 0, 0, 0, 0, 0, 0x4d47, 0, 0, 0, 0x48bd, 0,
    0, 0x5e34, 0x8793, 0, 0x5791, 0x5e37, 0x8795, 0, 0x8796, 0, 0, 0x4f9a, 0x5e36, 0, 0, 0,
    0x5e35, 0, 0, 0, 0, 0x6adb, 0x8797, 0x5e32, 0, 0, 0, 0, 0, 0x6adc, 0x5e26, 0,
    0x8798, 0x5e43, 0x5e25, 0, 0x5e38, 0, 0, 0x8799, 0, 0, 0x879a, 0x5e30, 0x879b, 0, 0x5e2b, 0x5e28,
    0x879c, 0x5e29, 0, 0x5e31, 0, 0, 0, 0x6a02, 0, 0, 0x5e2e, 0x4c9d, 0x5228, 0x50c4, 0x5e2c, 0x6add,
    0x5e27, 0x879d, 0, 0x5e2a, 0, 0, 0x879e, 0, 0x56ad, 0x55ca, 0, 0, 0, 0x5e2f, 0x5e39, 0,
    0, 0, 0x6b02, 0x87a4, 0, 0, 0, 0x5e41, 0x5e3a, 0x6b03, 0x6b04, 0x5e47, 0, 0x5e45, 0x87a5, 0x87a6,
    0, 0, 0x5e40, 0x87a7, 0x87a9, 0x6b05, 0x6b06, 0, 0, 0x5e3f, 0, 0x5230, 0, 0x50c5, 0x87aa, 0x5e3d,
    0, 0, 0x5e3b, 0, 0, 0x5e42, 0, 0, 0, 0, 0x5e48, 0x5455, 0x5e4e, 0, 0, 0x6b07,
    0, 0x87ab, 0x5e49, 0x5e4c, 0x5e46, 0x6b08, 0, 0x51d4, 0, 0x5498, 0x87ac, 0x5e3c, 0, 0x87ad, 0x5e44, 0x4f20,
    0, 0x562f, 0x5e58, 0x5e4b, 0, 0, 0, 0, 0, 0x4c02, 0x4903, 0x49bf, 0, 0, 0x5e33, 0,
    0x87a1, 0, 0x87af, 0x87b0, 0x87b1, 0x4f21, 0x5e50, 0, 0x5e57, 0x4e59, 0x49d2, 0x6b0a, 0, 0x518e, 0x6b0b, 0x87b2,
    0, 0, 0, 0, 0x5e4d, 0x6b0c, 0x87b3, 0x5e52, 0x5e56, 0x87b4, 0, 0x4b16, 0, 0, 0x87b6, 0,
    0x6b0d, 0, 0x87b7, 0, 0, 0, 0x6b0e, 0, 0x4aac, 0x5e54, 0, 0x6b0f, 0, 0, 0, 0x4a81,
    0, 0x532b, 0x5e53, 0, 0x87b8, 0, 0x5e55, 0, 0, 0, 0, 0x6b10, 0, 0, 0, 0,
    0, 0, 0x5e4f, 0x6b11, 0, 0, 0, 0, 0x5e51, 0, 0x87b5, 0, 0, 0, 0x87ba, 0x49c0,
    0x51a9, 0, 0, 0x87bb, 0x5e5c, 0, 0, 0, 0, 0x6b13, 0, 0x87bc, 0, 0x5e5a, 0x4c49, 0,
    0x5e59, 0x87be, 0, 0, 0x6b14, 0, 0, 0x5e81, 0, 0, 0, 0, 0x5db8, 0x6b15, 0x6b16, 0x87bf,
    0x5e5b, 0x87c0, 0x5e5d, 0x5e5e, 0, 0x6b17, 0, 0, 0, 0, 0x5e8c, 0x87c2, 0x5e88, 0, 0x5dcd, 0,
    0, 0, 0, 0x5e87, 0, 0, 0, 0, 0x5e86, 0, 0, 0x5e83, 0, 0x87c3, 0, 0,
    0, 0x5e4a, 0x5e85, 0x5e84, 0, 0, 0x87c4, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0x87c6, 0x5e8a, 0, 0x5786, 0x87c5, 0, 0, 0, 0, 0, 0x5e8d, 0x4b5b, 0x87c7, 0x87c8, 0x5e89, 0x5e8b,
    0, 0, 0, 0, 0x6b18, 0, 0, 0x6b19, 0x5407, 0, 0x5e8e, 0, 0x87cb, 0, 0, 0,
    0, 0x87cc, 0x87cd, 0x87ce, 0, 0, 0, 0, 0, 0, 0x5e92, 0x5e8f, 0, 0x87cf, 0, 0,
    0, 0, 0, 0, 0x56d3, 0x5e90, 0, 0, 0, 0, 0x5e3e, 0x87d1, 0, 0, 0, 0x87d2,
    0x87d3, 0x87d4, 0x5e93, 0, 0, 0, 0x5e94, 0x87d6, 0, 0, 0, 0x6b1c, 0, 0x4895, 0x6b1d, 0x5e96,
    0x4bc7, 0x4e01, 0, 0x4b35, 0, 0, 0, 0x4904, 0, 0, 0, 0, 0x6b1e, 0, 0, 0x87d8,
    0, 0, 0x56bf, 0, 0, 0x6b1f, 0, 0x5e98, 0x5e97, 0x5e9a, 0x4a9d, 0, 0, 0x4b36, 0x4a1e, 0,
    0, 0, 0, 0x5e9d, 0, 0, 0x6b20, 0x5e9c, 0, 0x5e9e, 0x87d9, 0, 0x492e, 0, 0x5197, 0,
    0x5e9f, 0, 0, 0x4a1f, 0x5ea1, 0, 0x6b21, 0, 0x87da, 0x5ea0, 0, 0x5ea2, 0, 0, 0, 0x5ea3,
    0x6b22, 0x5ea4, 0x4dbf, 0x5015, 0x4d01, 0x6b23, 0x54d0, 0x6b24, 0, 0x5542, 0x57a4, 0, 0x87db, 0, 0, 0x4dd5,
    0, 0, 0, 0x4d30, 0x5752, 0x87dc, 0, 0x6b25, 0x5ea5, 0x5ea6, 0x87dd, 0x4dc0, 0, 0, 0, 0x5ea7,
    0x5ea8, 0x87de, 0x6b26, 0x5eaa, 0x5ea9, 0, 0x55b8, 0, 0, 0x4ebe, 0x4e4c, 0x4da4, 0, 0x5eab, 0, 0,
    0, 0, 0, 0, 0, 0x5ead, 0x4f83, 0, 0x5eac, 0, 0, 0xa701, 0, 0, 0x5eae, 0,
    0, 0, 0, 0, 0x5eaf, 0, 0, 0, 0, 0x6b27, 0x5eb0, 0x5eb1, 0, 0x6b28, 0xa702, 0x5eb2,
    0, 0x5eb4, 0x5eb3, 0x5eb5, 0x4905, 0x51aa, 0, 0x5eb6, 0, 0, 0x4d86, 0x49ac, 0x5eb7, 0xa704, 0xa705, 0x52a2,
    0x5a2c, 0, 0, 0, 0, 0x4a83, 0x5eb8, 0xa706, 0xa707, 0xa708, 0, 0x5eb9, 0, 0x554c, 0x55c8, 0x6b2a,
    0, 0, 0x5327, 0x5eba, 0x5446, 0, 0x6b2b, 0x6b2c, 0x545b, 0, 0xa709, 0x5633, 0, 0, 0, 0x5ebb,
    0, 0, 0, 0, 0, 0, 0xa70a, 0xa70b, 0, 0, 0, 0x5ebd, 0x5ebc, 0, 0xa70c, 0x5ebf,
    0, 0xa70d, 0, 0x5ebe, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x6b2d,
    0, 0, 0xa70e, 0, 0, 0x6b2e, 0, 0, 0x5ec1, 0, 0xa70f, 0, 0, 0, 0xa710, 0x4dc1,
    0x6b2f, 0x5611, 0, 0x5ec2, 0x5ec3, 0, 0, 0x4a84, 0, 0, 0, 0x5ec4, 0, 0, 0, 0,
    0, 0, 0, 0x5ec6, 0x5ec5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0x6b30, 0x4fc5, 0xa711, 0xa712, 0x5499, 0x48aa, 0, 0xa713, 0, 0, 0, 0x5425, 0xa715,
    0x5255, 0x4ea1, 0x4ac1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa716, 0x5426, 0,
    0x4e0e, 0, 0, 0, 0, 0x5ec8, 0, 0x4a20, 0, 0x6b31, 0x48d8, 0xa717, 0x6b32, 0x5352, 0x5ec7, 0x4c9e,
    0x51b3, 0, 0x5ec9, 0, 0, 0, 0, 0xa72f, 0x5ed1, 0, 0x5eca, 0, 0, 0xa718, 0, 0,
    0x5121, 0, 0x4ac2, 0x5ed2, 0x6b34, 0, 0x6b35, 0, 0, 0, 0x4bc8, 0, 0, 0x4a85, 0x5ed0, 0,
    0, 0x5ece, 0x5ecb, 0x56c0, 0xa719, 0x6b36, 0x6b37, 0, 0x5220, 0xa71a, 0, 0, 0x5339, 0x5ecc, 0, 0,
    0x5ed4, 0, 0x5ed3, 0x4b83, 0xa71c, 0xa71d, 0x490d, 0xa71e, 0x6b38, 0x4d1b, 0x5ecd, 0x5ecf, 0x6b39, 0, 0, 0,
    0, 0x55b7, 0x5154, 0, 0, 0, 0, 0, 0, 0, 0x6b33, 0x55d7, 0, 0xa71f, 0x5edc, 0,
    0, 0x5edd, 0, 0x492f, 0, 0, 0, 0, 0x5508, 0x565d, 0x5f01, 0x4e03, 0x4f22, 0x5ed8, 0x5ede, 0x48c8,
    0, 0x4b17, 0xa720, 0, 0x5ed5, 0x5eda, 0x6b3b, 0, 0, 0x5054, 0x53d1, 0, 0x5447, 0, 0, 0,
    0xa721, 0, 0, 0x5ed7, 0x6b3c, 0x5581, 0xa723, 0x5ed9, 0, 0x5f04, 0xa724, 0x5f02, 0xa725, 0x5edb, 0, 0,
    0x6b3d, 0x5582, 0x53a8, 0x4ac3, 0, 0x5285, 0, 0, 0x51cd, 0xa726, 0x5f05, 0x6b3e, 0xa727, 0xa728, 0x6b3f, 0x5f03,
    0x5139, 0x5ed6, 0, 0x48ab, 0, 0, 0, 0, 0, 0, 0, 0x6b3a, 0, 0, 0, 0,
    0xa72a, 0, 0, 0, 0x6b41, 0, 0, 0, 0, 0, 0xa72b, 0x56ae, 0x5f10, 0, 0x6b42, 0,
    0, 0, 0x5f0f, 0, 0, 0, 0, 0x5056, 0, 0x5f0c, 0, 0x56cc, 0, 0, 0x5316, 0x5f06,
    0, 0, 0, 0, 0xa72c, 0x5225, 0xa72d, 0xa72e, 0, 0x48ac, 0x4c9f, 0x5f09, 0, 0, 0x6b43, 0xa730,
    0, 0x6b44, 0x4e87, 0x5f0e, 0xa745, 0x5f0d, 0x5f08, 0, 0x5f0b, 0x6b45, 0, 0x49c8, 0xa731, 0x5f0a, 0x53a9, 0x6b46,
    0, 0x570e, 0, 0, 0x4f54, 0x5055, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0x6b47, 0x5f16, 0x5f14, 0xa732, 0x54ad, 0, 0xa733, 0,
    0xa734, 0, 0, 0x5f11, 0x5f13, 0x6b48, 0x489a, 0, 0, 0x4ca0, 0x5792, 0, 0x499d, 0, 0x54c2, 0,
    0xa735, 0, 0, 0, 0x56c1, 0, 0, 0x4984, 0x4f9b, 0x5f15, 0, 0, 0, 0, 0, 0,
    0xa736, 0xa737, 0x6b4a, 0, 0, 0x5f1a, 0, 0x6b4b, 0x4f23, 0x6b4c, 0xa738, 0, 0x5690, 0xa739, 0x5f17, 0,
    0, 0xa73a, 0, 0x5f12, 0x6b4d, 0x5f18, 0, 0, 0xa73b, 0x573e, 0, 0x52d3, 0x5322, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x6b4e, 0xa741, 0x6b4f, 0, 0xa742, 0x4996,
    0, 0, 0x48b5, 0, 0xa743, 0x5f1e, 0, 0, 0x5f21, 0, 0, 0, 0x5723, 0, 0, 0x6b50,
    0x56c4, 0, 0xa744, 0, 0x6b51, 0x5f28, 0x5f22, 0x5f1f, 0xa746, 0, 0, 0x5734, 0x5f25, 0, 0xa747, 0xa748,
    0xa749, 0x4eaa, 0x5f27, 0, 0, 0x5f2c, 0x6b52, 0, 0x52d1, 0x5f2a, 0x6b53, 0x6b54, 0, 0x6b55, 0x5f24, 0xa74a,
    0, 0x5198, 0, 0, 0x5f2b, 0, 0x5f20, 0, 0x5f26, 0xa74b, 0x5f2d, 0x485c, 0x5f23, 0, 0x5f2e, 0,
    0, 0x4f9c, 0, 0x4ebf, 0, 0x5505, 0xa74c, 0x4d0e, 0, 0x5f1b, 0x5f29, 0x529a, 0x6b56, 0, 0, 0,
    0, 0, 0, 0, 0, 0x5016, 0, 0x49c9, 0x4d31, 0x4f24, 0x5f1d, 0x4ea2, 0, 0, 0, 0,
    0, 0, 0, 0x4bac, 0, 0x5f1c, 0, 0xa73d, 0, 0x5f32, 0x4ecd, 0x4c1a, 0, 0x5f41, 0xa74e, 0x5f3b,
    0x4ad4, 0x52af, 0xa74f, 0x5f36, 0x5f3f, 0x480f, 0x4892, 0xa750, 0, 0x4919, 0, 0x5f38, 0x510c, 0x5f2f, 0x5f31, 0x4ca1,
    0, 0, 0xa752, 0, 0x6b58, 0, 0xa74d, 0, 0x5f42, 0, 0x5f3d, 0, 0xa753, 0, 0x5f35, 0,
    0, 0, 0, 0x5f3c, 0x6b59, 0, 0, 0, 0xa754, 0xa755, 0x560b, 0xa756, 0xa757, 0x5f3a, 0x5f3e, 0xa758,
    0, 0xa759, 0, 0xa75a, 0xa75b, 0, 0x4c30, 0xa75c, 0x4f25, 0, 0, 0x5199, 0x6b5a, 0, 0x6b5b, 0x5f34,
    0, 0, 0, 0xa75d, 0, 0, 0, 0x568f, 0, 0, 0, 0x5f37, 0, 0, 0x5f30, 0x52d2,
    0, 0, 0x5f33, 0, 0, 0, 0x5f39, 0, 0, 0, 0, 0, 0, 0, 0x57b1, 0x4e1e,
    0x55de, 0, 0x5f43, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x540e, 0, 0, 0x5f4f,
    0x4c1b, 0, 0, 0xa781, 0, 0, 0x4ec0, 0, 0x5f45, 0, 0, 0, 0x570f, 0x4ca2, 0, 0x5f52,
    0, 0, 0x484e, 0, 0, 0x5f50, 0, 0xa782, 0, 0, 0x5f44, 0x6b5c, 0, 0, 0, 0x5f4a,
    0, 0x6b5d, 0x5f4c, 0, 0xa783, 0, 0x56af, 0x5f47, 0, 0, 0x528e, 0, 0, 0x5f49, 0, 0xa784,
    0, 0x6b5e, 0x5f51, 0xa785, 0x5f4b, 0x5627, 0, 0x6b81, 0, 0x5f46, 0xa786, 0x4e02, 0x5f5e, 0, 0x6b82, 0,
    0, 0x49ca, 0, 0x5f48, 0x5f4d, 0x5f4e, 0, 0, 0, 0xa787, 0, 0, 0, 0x514c, 0x513a, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa789, 0x5f56, 0, 0, 0x5f5c,
    0, 0, 0x5f5a, 0, 0x5289, 0, 0, 0x5f83, 0x5f57, 0xa78a, 0, 0xa78b, 0, 0, 0x5f58, 0x5f40,
    0, 0x4ad9, 0x549a, 0, 0, 0, 0x4e1f, 0, 0, 0x4cd7, 0xa78c, 0, 0xa78d, 0, 0, 0x5793,
    0x6b83, 0x5f54, 0, 0x5f82, 0x48c9, 0x50c6, 0, 0, 0xa78e, 0, 0x6b84, 0, 0, 0, 0, 0,
    0x53d9, 0, 0x4a21, 0x575a, 0, 0xa78f, 0, 0, 0, 0, 0x6b86, 0x5601, 0x5232, 0, 0, 0x6b87,
    0, 0x5f5b, 0x5f5d, 0x6b88, 0, 0xa788, 0xa790, 0, 0x5092, 0, 0, 0, 0xa791, 0, 0x5f81, 0x5f59,
    0, 0x5f53, 0, 0, 0, 0x4a23, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0x6b89, 0xa793, 0, 0x4bc9, 0, 0, 0xa794, 0x5f8f, 0x6b8a, 0xa795, 0x5f8a, 0x5058, 0, 0x6b8b, 0x49c3,
    0xa796, 0x6b8c, 0x6b8d, 0, 0x4ec1, 0, 0x5f93, 0, 0xa797, 0, 0, 0, 0, 0x5f8c, 0x520c, 0x5f89,
    0x5239, 0, 0, 0, 0x5fac, 0, 0, 0, 0x5f86, 0, 0x5f85, 0, 0x5f8e, 0xa799, 0x6b8e, 0,
    0x5f88, 0x5f87, 0x5f8d, 0, 0x5001, 0, 0x5f84, 0, 0x6b8f, 0, 0, 0, 0x6b90, 0x6b91, 0x5f90, 0,
    0xa79a, 0x5f91, 0, 0, 0x6b92, 0, 0xa79b, 0x4a22, 0xa798, 0, 0, 0, 0, 0, 0, 0xa79d,
    0x6b93, 0x5f96, 0, 0x5f95, 0x5f97, 0xa79e, 0, 0x6b94, 0, 0, 0x5f9a, 0, 0, 0, 0, 0xa79f,
    0, 0x52a3, 0, 0x5f94, 0, 0xa7a1, 0x6b95, 0, 0, 0x5f98, 0, 0, 0x6b96, 0, 0xa79c, 0,
    0x4bc3, 0x5159, 0x5f92, 0x539b, 0, 0, 0x5f99, 0x6b97, 0xa7a2, 0xa7a3, 0x6b98, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0x5f9e, 0x5f9c, 0, 0, 0x5f9f, 0, 0xa7a4, 0x5fa2, 0, 0, 0xa7a5, 0x5f9b,
    0x4cca, 0x5388, 0, 0, 0x5f19, 0, 0, 0, 0, 0xa7a6, 0, 0x56d4, 0x5f9d, 0, 0x5fa1, 0x5155,
    0x6b9a, 0x5fa0, 0, 0x5f8b, 0, 0x6b9b, 0x67c9, 0, 0, 0x6b99, 0x5fa5, 0, 0xa7a8, 0, 0x5fa9, 0,
    0xa7a9, 0x5fa7, 0, 0, 0, 0x6b9c, 0x6b9d, 0xa7aa, 0, 0x5fa3, 0xa7ab, 0x5fa4, 0, 0, 0, 0x5fa8,
    0, 0x5fa6, 0, 0, 0, 0x54ae, 0, 0, 0x5fae, 0, 0x5fab, 0x5faa, 0, 0x5fad, 0x5334, 0x5faf,
    0, 0, 0, 0xa7ac, 0, 0, 0x51d5, 0x514d, 0x6b9e, 0, 0, 0, 0x5005, 0, 0, 0,
    0x5fb0, 0, 0x5fb2, 0, 0, 0, 0, 0, 0, 0xa7ae, 0xa7af, 0, 0xa7b0, 0, 0x5fb1, 0,
    0, 0, 0, 0xa7b1, 0, 0, 0, 0xa7b2, 0, 0, 0x6b9f, 0xa7b3, 0x5f55, 0, 0x6ba2, 0,
    0, 0x5fb3, 0, 0, 0xa7b5, 0, 0, 0, 0x5347, 0, 0, 0, 0, 0x6ba0, 0x6ba1, 0,
    0, 0, 0, 0x5fb4, 0x6ba3, 0xa7b6, 0, 0, 0, 0xa7b7, 0, 0x4930, 0xa7b8, 0, 0xa7b9, 0x52d4,
    0x4985, 0, 0, 0, 0, 0x6ba4, 0xa7ba, 0, 0x4ac4, 0, 0, 0, 0x4e3e, 0x4d32, 0xa7bb, 0,
    0, 0xa7bc, 0, 0, 0, 0x6ba5, 0xa7bd, 0, 0, 0x5787, 0x4fc6, 0, 0, 0, 0x48ca, 0,
    0, 0, 0x5fb6, 0, 0, 0xa7be, 0, 0xa7bf, 0, 0x5fb5, 0, 0, 0, 0, 0, 0xa7c2,
    0, 0, 0, 0, 0x6ba6, 0, 0, 0, 0, 0, 0, 0x6ba7, 0x5fb9, 0x519a, 0x5fbc, 0x5fb7,
    0, 0xa7c3, 0, 0x5fbb, 0, 0, 0, 0x6ba8, 0x5fba, 0x52a0, 0x4839, 0xa7c0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0x5755, 0, 0xa7c6, 0x5fbe, 0, 0, 0, 0x4888,
    0, 0xa7c7, 0, 0xa7c8, 0x6ba9, 0, 0, 0, 0x6baa, 0x5fc0, 0, 0, 0xa7c9, 0x5fbf, 0, 0x5fbd,
    0, 0, 0, 0, 0x6bab, 0, 0, 0, 0, 0, 0, 0, 0xa7c5, 0, 0, 0,
    0, 0x5fb8, 0, 0, 0, 0, 0, 0, 0, 0x5583, 0, 0, 0, 0x5fc2, 0, 0,
    0, 0, 0, 0xa7ca, 0xa7cb, 0, 0xa7cc, 0xa7cd, 0xa7ce, 0x5fc1, 0, 0, 0xa7cf, 0, 0, 0x6bac,
    0, 0, 0, 0, 0x48cb, 0, 0, 0, 0, 0x5fc4, 0x5512, 0, 0x5fc3, 0, 0x6bae, 0,
    0x6baf, 0x5615, 0, 0, 0, 0, 0x4f27, 0, 0, 0, 0, 0x6bad, 0, 0, 0x6bb0, 0xa7d1,
    0x6bb1, 0xa7d2, 0, 0, 0, 0, 0x5093, 0, 0, 0, 0, 0, 0x4f26, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0x6bb2, 0x6bb3, 0, 0x575b, 0xa7d4, 0, 0x5fca, 0, 0x5059, 0,
    0xa7d3, 0x6bb4, 0x6bb6, 0xa7d5, 0, 0x5fc6, 0x5fcb, 0, 0, 0x48cc, 0, 0, 0x6bb7, 0, 0xa7d6, 0,
    0x6bb8, 0, 0x5fc9, 0, 0x53c1, 0x5fc5, 0x5fc8, 0x4f28, 0x6bb9, 0x5431, 0, 0, 0x5fcc, 0, 0x4e31, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x505a, 0, 0,
    0xa7d9, 0, 0, 0, 0x5fcf, 0x6bbb, 0, 0x6bbc, 0x5fc7, 0, 0x4b87, 0, 0, 0, 0, 0x5fcd,
    0, 0, 0x6bbd, 0, 0x56b0, 0x5fd0, 0xa7d8, 0, 0, 0x6a06, 0, 0xa7da, 0, 0, 0, 0x4eaf,
    0xa7db, 0, 0xa7dc, 0, 0, 0, 0, 0, 0x5fd1, 0, 0, 0, 0x5fd2, 0, 0xa7dd, 0xa7de,
    0, 0x538e, 0, 0xa801, 0, 0, 0, 0, 0, 0x5fd4, 0x6bbf, 0, 0, 0, 0x5fd5, 0,
    0, 0x6bbe, 0, 0x5393, 0x6bc0, 0, 0, 0, 0x52d5, 0x5fd7, 0, 0xa803, 0, 0, 0x5fd9, 0,
    0x5735, 0, 0x5fd6, 0xa804, 0x5fd8, 0x48cd, 0, 0x5fd3, 0, 0xa805, 0, 0, 0xa806, 0, 0, 0x59bb,
    0x5fda, 0, 0, 0, 0, 0x50c7, 0x4d98, 0x5fdc, 0, 0, 0, 0, 0x5fdb, 0x4f84, 0x5939, 0,
    0, 0, 0, 0, 0, 0x5fdd, 0, 0, 0, 0x6001, 0, 0x5fce, 0x5fde, 0, 0x6bc1, 0x6002,
    0x6bc2, 0, 0, 0, 0, 0, 0x53da, 0xa807, 0, 0, 0, 0, 0, 0x6003, 0, 0,
    0x6004, 0, 0, 0, 0, 0x6bc3, 0, 0, 0, 0, 0, 0x6005, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0x6006, 0, 0x523e, 0xa80a, 0x6008, 0x6007, 0, 0,
    0x6009, 0, 0x600a, 0, 0xa80b, 0x4e3f, 0x54c3, 0, 0xa80c, 0xa80d, 0x564c, 0x600b, 0x600c, 0x50b6, 0x4e04, 0x600d,
    0x600e, 0, 0xa80f, 0, 0, 0, 0x600f, 0x5532, 0x5427, 0, 0, 0x6010, 0x53b7, 0, 0, 0,
    0, 0, 0x520d, 0xa810, 0, 0x6bc4, 0x6bc5, 0xa811, 0x6011, 0x4947, 0, 0x4acd, 0, 0x5626, 0, 0x5616,
    0, 0x4914, 0x5794, 0xa812, 0, 0, 0, 0x55b2, 0, 0x550a, 0, 0, 0, 0, 0xa814, 0xa815,
    0, 0, 0x5017, 0, 0x6012, 0, 0, 0, 0xa816, 0x5323, 0, 0, 0, 0x4c03, 0x6013, 0xa817,
    0x4d34, 0x6015, 0x6014, 0, 0, 0, 0, 0x6016, 0, 0, 0, 0, 0, 0x6bc7, 0xa818, 0,
    0, 0, 0x6017, 0, 0, 0, 0x6018, 0, 0, 0, 0, 0x6bc8, 0, 0, 0, 0,
    0x4a9e, 0, 0x6019, 0, 0, 0, 0, 0x601a, 0, 0, 0, 0, 0x4c04, 0xa81a, 0xa81b, 0x5428,
    0xa81c, 0xa81d, 0x601c, 0, 0, 0, 0x4f55, 0, 0, 0x601b, 0, 0, 0, 0, 0x6bc9, 0,
    0x6bca, 0xa81e, 0x4b18, 0x601d, 0x601f, 0, 0x601e, 0, 0, 0, 0, 0, 0xa820, 0, 0x6020, 0,
    0x4c31, 0, 0x6021, 0, 0, 0, 0, 0x4b49, 0, 0x50a0, 0, 0x4cdd, 0, 0, 0, 0,
    0x6023, 0x6024, 0x6022, 0, 0, 0, 0, 0, 0, 0x4e4d, 0, 0, 0x5328, 0x4b19, 0, 0,
    0, 0, 0, 0xa823, 0, 0, 0, 0x6026, 0x518c, 0x6025, 0xa824, 0x6bcb, 0x5795, 0x53c2, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0xa825, 0, 0, 0x6029, 0, 0, 0, 0, 0,
    0, 0, 0xa826, 0, 0, 0, 0x602b, 0x6028, 0xa827, 0xa828, 0, 0x5634, 0x602a, 0x602c, 0, 0x5724,
    0, 0, 0, 0, 0, 0x6030, 0, 0x6bcd, 0x6bce, 0x602f, 0x51d6, 0x538d, 0xa82b, 0, 0x4c05, 0x602e,
    0, 0xa82c, 0, 0xa82d, 0x602d, 0, 0x5691, 0x5692, 0, 0xa82a, 0, 0, 0, 0xa82e, 0x6031, 0x48ce,
    0, 0, 0, 0, 0x4cd6, 0x4dc2, 0, 0, 0, 0, 0, 0, 0, 0, 0x6032, 0x6033,
    0x6bd0, 0, 0xa82f, 0, 0, 0, 0, 0x6035, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0x4ea3, 0, 0, 0x6bd1, 0, 0x6037, 0, 0x6036, 0xa831, 0xa832, 0, 0xa834, 0xa835,
    0x6038, 0xa836, 0x49ad, 0, 0, 0x603a, 0, 0xa837, 0x6039, 0, 0x603c, 0x603b, 0x6bd2, 0, 0, 0,
    0, 0xa838, 0, 0, 0x4c1c, 0xa839, 0, 0x5708, 0, 0x4b2c, 0xa83a, 0x4906, 0, 0, 0, 0,
    0, 0, 0, 0, 0xa83b, 0x6bd3, 0x4b4a, 0, 0xa83c, 0, 0, 0, 0xa83d, 0, 0xa83e, 0x6bd4,
    0x6bd5, 0, 0x6bd6, 0, 0, 0xa83f, 0x6bd7, 0, 0xa840, 0x4a41, 0, 0x6bd8, 0, 0, 0, 0,
    0, 0, 0x5748, 0x603e, 0, 0xa841, 0, 0xa842, 0, 0xa843, 0, 0x6040, 0xa844, 0, 0, 0xa845,
    0x6041, 0, 0x4931, 0, 0, 0xa846, 0, 0, 0x603d, 0x6bd9, 0x4d99, 0xa847, 0, 0x5221, 0x603f, 0x6bda,
    0, 0, 0, 0, 0, 0, 0x6bdb, 0, 0, 0x6bdc, 0, 0, 0, 0, 0x6044, 0,
    0x4e4e, 0xa848, 0, 0x6bdd, 0, 0x6042, 0, 0xa849, 0, 0x6bde, 0x4b9e, 0, 0, 0x5429, 0x6043, 0,
    0, 0x605e, 0, 0, 0, 0, 0, 0, 0x6049, 0xa84a, 0xa84c, 0, 0, 0, 0x4c1d, 0,
    0, 0xa84d, 0, 0x4ac5, 0, 0x6046, 0x56dd, 0x6c01, 0, 0x5710, 0x6c02, 0, 0, 0, 0, 0,
    0, 0, 0, 0xa84b, 0, 0, 0, 0, 0, 0, 0x6c03, 0x6c04, 0, 0, 0, 0,
    0, 0, 0x5156, 0, 0xa84e, 0x6048, 0x6c06, 0, 0x6c07, 0, 0x6c08, 0x6c09, 0x6c0a, 0, 0x6c0b, 0x6c0c,
    0x6c0d, 0xa84f, 0x604a, 0x5736, 0x4b37, 0x545c, 0x53aa, 0, 0, 0xa850, 0x604b, 0, 0, 0, 0, 0x604d,
    0xa852, 0x6050, 0, 0xa853, 0x6c0e, 0, 0x6c0f, 0x6c10, 0, 0, 0, 0x6c11, 0, 0xa854, 0, 0,
    0, 0, 0xa855, 0xa851, 0, 0x604c, 0, 0x6c12, 0, 0x604f, 0x4c4a, 0x48ad, 0x6051, 0xa856, 0x4fd0, 0x604e,
    0x573c, 0, 0x6c13, 0x6054, 0x6a04, 0, 0, 0, 0, 0x6052, 0x6055, 0x6c14, 0, 0x6c15, 0, 0x6047,
    0x6053, 0xa857, 0, 0x4d1c, 0, 0, 0x6056, 0, 0, 0, 0, 0, 0, 0, 0x6057, 0,
    0, 0xa858, 0, 0x56de, 0, 0xa859, 0x6c16, 0x6c17, 0xa85a, 0x6c18, 0, 0x6058, 0, 0, 0, 0,
    0x6c1d, 0, 0xa85c, 0, 0, 0, 0, 0xa85d, 0x6c19, 0xa85e, 0, 0, 0x6c1a, 0, 0x6059, 0x6c1b,
    0xa881, 0xa882, 0x6045, 0x6c1c, 0, 0xa883, 0x6c1e, 0x605a, 0x6c1f, 0x6c20, 0xa884, 0xa885, 0, 0, 0, 0,
    0x4a24, 0, 0, 0, 0, 0x6c21, 0, 0, 0, 0xa886, 0xa888, 0xa887, 0, 0x4e05, 0, 0x6c22,
    0, 0, 0, 0, 0, 0, 0, 0, 0x6c23, 0x6c24, 0x605b, 0, 0, 0, 0, 0x605c,
    0, 0, 0, 0, 0x605d, 0, 0xa889, 0, 0xa88a, 0, 0x6c25, 0, 0x489b, 0, 0xa88b, 0,
    0x6081, 0, 0x549b, 0x6082, 0, 0, 0x4a04, 0x6083, 0, 0x6084, 0, 0xa88d, 0, 0, 0x6085, 0xa88c,
    0x6087, 0x6088, 0x6086, 0, 0, 0, 0x54b3, 0x608a, 0x6089, 0, 0xa88f, 0, 0, 0, 0, 0x6c26,
    0, 0x6c27, 0, 0x608c, 0x608b, 0x608d, 0, 0, 0, 0, 0, 0, 0x608e, 0x6090, 0x608f, 0,
    0, 0x4cd9, 0, 0x6092, 0, 0x6091, 0, 0x6c28, 0x4a25, 0, 0x4fb3, 0, 0x529c, 0, 0x6093, 0x5018,
    0xa891, 0, 0, 0x4d9a, 0xa892, 0x48d9, 0x6094, 0, 0x56b1, 0, 0xa893, 0x5543, 0x6095, 0, 0, 0x6c29,
    0x52a4, 0x5693, 0x4ca3, 0x4f9d, 0, 0, 0, 0x51ab, 0x5914, 0, 0x520e, 0x4948, 0x6096, 0xa896, 0xa897, 0,
    0xa898, 0, 0, 0, 0x6097, 0, 0x609c, 0, 0xa899, 0x609a, 0x6099, 0x5d22, 0x4986, 0x6098, 0xa89a, 0x483a,
    0xa89b, 0x540a, 0xa89c, 0, 0x542a, 0, 0, 0, 0, 0x5711, 0x609d, 0x609b, 0x51bc, 0x5006, 0, 0,
    0x540b, 0, 0x548d, 0, 0x609f, 0x570c, 0x4bad, 0x60a0, 0, 0x609e, 0x5436, 0x60a1, 0xa89d, 0x60a2, 0, 0x6c2a,
    0x483b, 0xa89f, 0xa89e, 0x4f56, 0x60a7, 0, 0x60a4, 0x534d, 0x60a3, 0x6c2b, 0xa8a0, 0, 0, 0xa8a1, 0xa8a2, 0x4a86,
    0, 0xa8a3, 0x60aa, 0, 0, 0, 0x60a5, 0x60a6, 0, 0x60a9, 0x60a8, 0x5485, 0xa8a5, 0, 0x50a2, 0x50a1,
    0, 0x4a9f, 0x6c2c, 0, 0x60ab, 0, 0, 0, 0, 0, 0x60ac, 0, 0, 0x60ad, 0, 0,
    0, 0, 0xa8a7, 0x60af, 0, 0x60ae, 0, 0, 0, 0, 0, 0x48b6, 0, 0, 0, 0,
    0xa8a9, 0x60b7, 0x5448, 0x60b1, 0, 0x60b3, 0, 0xa8aa, 0x60b5, 0x4f9e, 0, 0, 0x60b6, 0x60b4, 0x4e20, 0xa8ab,
    0xa8ac, 0, 0x60b0, 0x60b2, 0, 0x54a2, 0xa8ad, 0x4f29, 0, 0, 0x60b9, 0, 0, 0x60b8, 0x6c2e, 0xa8ae,
    0, 0, 0x60ba, 0xa8af, 0x4e06, 0x4d0f, 0, 0, 0x52d7, 0x60bb, 0, 0x522b, 0, 0xa8b0, 0x60bd, 0xa8b1,
    0xa8b2, 0, 0x5701, 0x60bc, 0x6c2f, 0, 0, 0xa8b3, 0, 0x50c9, 0, 0, 0xa8b4, 0, 0xa8b5, 0,
    0x60c2, 0xa8b6, 0x60c4, 0x60c5, 0x51b4, 0, 0, 0, 0, 0xa8b7, 0x60c3, 0, 0x60c0, 0, 0x60be, 0x60bf,
    0x6c30, 0x60c1, 0x6c31, 0xa8b8, 0, 0, 0, 0xa8ba, 0x6c32, 0x60c8, 0, 0x60c6, 0, 0x60c7, 0, 0xa8bb,
    0, 0, 0, 0xa8be, 0, 0x6c33, 0x6c34, 0, 0xa8b9, 0x6c35, 0, 0xa8bf, 0xa8c0, 0, 0x6c36, 0x60c9,
    0x60cb, 0x60cc, 0x60cd, 0, 0x60ce, 0xa8c2, 0x6f5d, 0x60ca, 0xa8c3, 0, 0, 0, 0, 0x6c37, 0, 0,
    0x60d0, 0, 0, 0xa8c5, 0x60cf, 0x6c38, 0, 0, 0, 0, 0, 0x60d1, 0xa8c4, 0, 0, 0,
    0, 0xa8c8, 0x5725, 0x6c39, 0, 0, 0x60d4, 0x60d2, 0x60d3, 0xa8ca, 0, 0x6c3a, 0x4a42, 0, 0, 0,
    0, 0, 0x565e, 0, 0, 0xa8cb, 0x552a, 0, 0x60d6, 0, 0, 0, 0x60d5, 0, 0, 0,
    0, 0x60d7, 0x60d8, 0, 0x6c3b, 0x6c3c, 0, 0x60dc, 0x60d9, 0x60da, 0x60db, 0, 0x60dd, 0x6c3d, 0xa8cd, 0x6c3e,
    0x60de, 0x6c3f, 0x6101, 0, 0, 0, 0x6102, 0, 0x6103, 0, 0x540f, 0x52b0, 0x6104, 0x53d2, 0x5494, 0,
    0x6105, 0x6c40, 0, 0x6106, 0x528a, 0, 0x4987, 0x4ca4, 0x6107, 0, 0, 0x6108, 0, 0, 0x6109, 0,
    0x4d89, 0, 0, 0x610b, 0, 0xa8ce, 0x610a, 0, 0, 0x610c, 0x610d, 0x6c41, 0xa8cf, 0x6c42, 0x6c43, 0,
    0xa8d1, 0xa8d0, 0, 0, 0, 0, 0x6c44, 0xa8d2, 0xa8d3, 0, 0x6c45, 0, 0, 0, 0x5449, 0xa8d4,
    0x610e, 0, 0, 0, 0x610f, 0, 0x6c46, 0x69c9, 0x6110, 0x6111, 0x6112, 0, 0, 0, 0, 0x4d8e,
    0, 0, 0x6113, 0x53b6, 0, 0x6c47, 0x55bf, 0, 0x48ae, 0xa8d6, 0x48b7, 0, 0x6c48, 0x6114, 0x6c49, 0,
    0, 0, 0x6116, 0, 0x6c4a, 0, 0x6115, 0x52d0, 0, 0, 0, 0x5019, 0x5e99, 0, 0x6117, 0x5621,
    0, 0x6118, 0, 0x4a26, 0x5437, 0x6119, 0x6c4b, 0x611a, 0xa8d8, 0, 0x611b, 0, 0xa8d9, 0, 0x563c, 0,
    0, 0x6c4c, 0x5635, 0, 0x521e, 0, 0, 0, 0x50ca, 0, 0, 0x611d, 0x6c4d, 0, 0x4ec2, 0,
    0, 0x4f2a, 0, 0, 0x6120, 0, 0, 0x611f, 0x611e, 0x545d, 0x6c4e, 0x4a27, 0x4c09, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0xa8db, 0, 0x6c4f, 0xa8dc, 0x6126, 0, 0, 0x6123, 0x4f9f,
    0x5612, 0, 0, 0, 0x6122, 0x6124, 0x6125, 0, 0, 0x6121, 0, 0, 0, 0xa8dd, 0, 0,
    0, 0, 0, 0, 0x6c50, 0xa8de, 0x6c51, 0x6127, 0x6128, 0, 0x520f, 0, 0x4a43, 0, 0, 0,
    0x51c5, 0, 0, 0, 0, 0, 0x6c52, 0x6129, 0, 0, 0, 0, 0, 0x6c53, 0x6c54, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0xa905, 0, 0x612a, 0x612d, 0x6c55, 0, 0, 0x6c56,
    0xa906, 0x4fc7, 0x6c57, 0x5324, 0, 0x612e, 0x55b3, 0, 0x612b, 0, 0xa907, 0x612c, 0, 0, 0, 0,
    0, 0, 0xa909, 0, 0, 0, 0, 0, 0, 0x6131, 0x6c58, 0, 0xa90a, 0xa90b, 0x6130, 0x612f,
    0x6c59, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x6133, 0, 0, 0x6132, 0,
    0, 0x6134, 0, 0, 0x6c5a, 0, 0, 0, 0, 0, 0xa90e, 0, 0, 0, 0x6136, 0xa90f,
    0x6135, 0, 0xa910, 0, 0xa911, 0x552d, 0, 0, 0, 0xa912, 0x6c5b, 0, 0x4eb6, 0x5726, 0, 0,
    0x6137, 0, 0, 0x5317, 0, 0, 0x6138, 0, 0, 0x6139, 0, 0x613d, 0x613b, 0x613c, 0, 0x613a,
    0, 0, 0, 0, 0, 0, 0, 0x613e, 0, 0, 0, 0, 0, 0x613f, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0x6140, 0, 0, 0x6141, 0x5617, 0x6142, 0, 0xa913, 0xa914,
    0x6c5c, 0, 0x5650, 0x6143, 0xa915, 0x51ae, 0xa916, 0x53ca, 0, 0x4b4b, 0xa917, 0, 0xa918, 0x519b, 0x6144, 0x4b1a,
    0xa91a, 0, 0, 0x5030, 0xa91b, 0, 0, 0, 0, 0, 0, 0xa91c, 0x6145, 0, 0, 0,
    0, 0, 0x4d1d, 0, 0, 0xa91e, 0xa91f, 0, 0, 0xa920, 0, 0, 0x6146, 0xa921, 0, 0,
    0, 0, 0x6147, 0, 0x4c06, 0x4d35, 0, 0, 0, 0xa922, 0, 0, 0, 0, 0, 0,
    0x6149, 0xa923, 0, 0, 0, 0x52b6, 0x4d36, 0x4aae, 0, 0, 0, 0, 0xa924, 0x6c5d, 0, 0,
    0, 0, 0x5584, 0, 0x53ab, 0, 0, 0, 0, 0, 0x52b7, 0, 0, 0, 0, 0x4cbc,
    0, 0, 0, 0x6c81, 0, 0x614b, 0, 0xa925, 0, 0, 0, 0, 0, 0, 0x6c82, 0x6c83,
    0, 0x6c84, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x4f2b, 0, 0,
    0, 0, 0, 0, 0xa926, 0, 0, 0, 0x6c85, 0, 0xa927, 0x5712, 0x4ca5, 0, 0x6c86, 0x4c07,
    0, 0, 0x5403, 0, 0x614d, 0, 0, 0, 0, 0, 0, 0, 0x614f, 0, 0, 0,
    0, 0x4c4b, 0, 0, 0, 0, 0x614e, 0x5256, 0, 0, 0xa929, 0, 0x6151, 0x4997, 0x614c, 0,
    0, 0x544a, 0, 0x4890, 0xa92a, 0x4d4c, 0, 0x57b2, 0, 0, 0x6150, 0, 0, 0xa92c, 0xa92d, 0xa92e,
    0, 0, 0, 0x6152, 0xa92b, 0, 0, 0x552b, 0, 0x5039, 0x6154, 0, 0, 0x6c8a, 0, 0x6155,
    0x6c88, 0, 0, 0, 0, 0x6153, 0, 0, 0, 0, 0x49ae, 0xa92f, 0x615b, 0, 0x615a, 0,
    0, 0x4e07, 0, 0, 0, 0x615c, 0x6157, 0, 0xa930, 0, 0x615d, 0x6158, 0xa931, 0, 0xa932, 0,
    0x5438, 0x6156, 0, 0, 0x6159, 0xa933, 0, 0, 0, 0, 0x6182, 0, 0, 0, 0, 0,
    0xa934, 0xa935, 0, 0, 0x6c8b, 0, 0xa936, 0x6181, 0x55c1, 0, 0, 0, 0x615e, 0, 0, 0x484b,
    0, 0, 0x6c8c, 0, 0x6184, 0, 0, 0x6c8e, 0, 0xa937, 0xa938, 0xa939, 0, 0x6183, 0xa93a, 0,
    0x6c8d, 0x4f2c, 0, 0, 0, 0, 0, 0x6185, 0, 0, 0, 0, 0, 0, 0x50a3, 0,
    0xa93c, 0x6187, 0x6186, 0, 0, 0, 0, 0, 0, 0x6188, 0, 0xa93d, 0x6c8f, 0, 0, 0,
    0, 0, 0, 0, 0, 0xa93f, 0x6148, 0, 0, 0, 0x614a, 0x618a, 0x6189, 0, 0x6c90, 0,
    0xa93e, 0x6c91, 0, 0, 0x6c92, 0, 0, 0, 0, 0, 0x4e08, 0xa940, 0x5749, 0, 0x4e32, 0,
    0x618b, 0x4b97, 0, 0, 0, 0x6c95, 0x6c96, 0x4aa0, 0x4a87, 0x4dc3, 0xa941, 0, 0, 0, 0, 0,
    0x5694, 0, 0, 0x6191, 0, 0x6190, 0x50a4, 0x618d, 0xa942, 0, 0x618f, 0xa943, 0x6c9a, 0x4eab, 0x4fa0, 0x618e,
    0x618c, 0, 0x538a, 0, 0, 0x4f2d, 0, 0xa945, 0x549c, 0, 0, 0, 0, 0x4d37, 0, 0,
    0, 0, 0xa946, 0, 0, 0, 0, 0x52d8, 0, 0x6c9e, 0x6192, 0, 0, 0, 0, 0x6193,
    0x61a9, 0x4b38, 0, 0, 0x579d, 0x5095, 0, 0, 0, 0, 0x6194, 0, 0, 0x4932, 0x5257, 0x5501,
    0, 0, 0, 0, 0xa947, 0xa948, 0xa949, 0, 0x6ca2, 0, 0, 0xa94a, 0, 0x6195, 0, 0,
    0, 0xa94b, 0, 0, 0, 0, 0x4ada, 0x6196, 0, 0xa94c, 0x6198, 0, 0, 0, 0x6199, 0,
    0x5389, 0x6ca3, 0, 0x619a, 0xa94d, 0, 0, 0, 0x6ca4, 0x619b, 0x619c, 0xa94e, 0, 0x4b39, 0x4933, 0x5325,
    0x4e88, 0x4dc4, 0xa94f, 0, 0, 0, 0, 0xa950, 0x6ca5, 0x619d, 0x6ca6, 0x4e89, 0xa951, 0xa952, 0, 0,
    0, 0x492a, 0x54a3, 0, 0x6ca8, 0x619e, 0xa953, 0, 0x544b, 0, 0, 0, 0, 0, 0x6ca9, 0x50a5,
    0, 0x61a1, 0, 0x61a2, 0x53c9, 0, 0x4fa1, 0x619f, 0, 0x51c1, 0, 0x6caa, 0x61a0, 0x6cab, 0, 0,
    0x4f2e, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x483c, 0, 0, 0, 0,
    0x4a89, 0, 0, 0x6cac, 0, 0, 0, 0, 0x61a3, 0, 0xa958, 0x5258, 0, 0x61a4, 0x5027, 0,
    0, 0xa959, 0, 0, 0x560d, 0xa95a, 0, 0x5483, 0x61a5, 0x61a6, 0x51b5, 0xa95b, 0x5727, 0, 0xa95c, 0x61a8,
    0x61a7, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0xa95e, 0x4e4f, 0,
    0, 0x61aa, 0x4850, 0, 0, 0, 0, 0x61ad, 0xa981, 0x6cae, 0, 0x61ab, 0x4934, 0x4bae, 0x61ac, 0x4ca6,
    0x4cd2, 0, 0x5546, 0x61ae, 0, 0, 0x55b4, 0xa982, 0, 0x61b0, 0, 0, 0xa983, 0x5031, 0x48af, 0x491a,
    0x480c, 0, 0, 0, 0, 0, 0xa984, 0x61af, 0, 0xa985, 0, 0, 0xa986, 0x6caf, 0, 0xa987,
    0xa988, 0x61b1, 0x61b2, 0x4f57, 0, 0, 0, 0xa989, 0, 0x61b3, 0xa98a, 0x49af, 0, 0x6cb0, 0, 0,
    0x61b5, 0, 0, 0, 0x4bca, 0xa98b, 0x4ac6, 0, 0xa98c, 0x61b6, 0x4b55, 0, 0, 0x61b7, 0, 0x505c,
    0, 0x532d, 0xa98d, 0x5040, 0x4d55, 0x6cb2, 0, 0, 0x61b8, 0, 0xa98e, 0, 0, 0, 0, 0,
    0xa98f, 0, 0x51c2, 0x50cb, 0, 0x61ba, 0x61bc, 0x61b9, 0x61bb, 0, 0, 0, 0, 0, 0, 0x4b82,
    0x6cb3, 0, 0, 0xa990, 0, 0, 0, 0, 0, 0x61bd, 0x4b86, 0, 0xa991, 0, 0x4ac7, 0x56b2,
    0x61bf, 0, 0, 0x6cb5, 0, 0, 0x61c0, 0, 0, 0xa994, 0x488e, 0x6cb6, 0xa995, 0, 0xa996, 0x61c3,
    0, 0, 0, 0x49d6, 0x61c2, 0x61c1, 0, 0x61c5, 0x61be, 0, 0x61c6, 0x5709, 0xa998, 0x61c7, 0x6cb7, 0x61c8,
    0, 0xa999, 0x5a54, 0x61ca, 0, 0x61c9, 0, 0, 0, 0x61cb, 0x61cc, 0, 0x5715, 0x61cd, 0, 0x684f,
    0x4f2f, 0x61ce, 0x61cf, 0x4eb7, 0, 0x5318, 0x61d0, 0xa99a, 0xa99b, 0, 0x5188, 0x6cb8, 0, 0x61d1, 0, 0x519c,
    0x61d2, 0, 0, 0, 0xa99c, 0, 0x4b05, 0, 0x589f, 0x51bd, 0x4e13, 0, 0, 0x6cb9, 0, 0x4a28,
    0, 0, 0x61d3, 0, 0x6202, 0, 0x61d6, 0xa99f, 0x4ac8, 0, 0x61d5, 0x6204, 0, 0, 0, 0x61d4,
    0, 0x4f30, 0x6cba, 0, 0, 0, 0, 0, 0x61d8, 0x61d9, 0, 0x528b, 0, 0, 0x61da, 0,
    0x49be, 0, 0, 0, 0, 0x4fba, 0x54c4, 0xa9a2, 0x61dc, 0, 0xa9a3, 0, 0x5148, 0x6cbb, 0xa9a4, 0xa9a5,
    0, 0xa9a6, 0, 0x61d7, 0, 0x61db, 0x61dd, 0, 0, 0x4d5b, 0, 0x6cbc, 0, 0xa9a1, 0, 0,
    0, 0xa9aa, 0, 0, 0, 0x6206, 0x548e, 0x6cbd, 0x5406, 0x52d9, 0, 0x4b3a, 0x6205, 0x6203, 0x6cbe, 0x5415,
    0x61de, 0x51be, 0x52db, 0, 0x52da, 0xa9ac, 0x4d56, 0, 0, 0, 0, 0, 0, 0x6218, 0, 0,
    0x6cbf, 0, 0, 0, 0xa9ae, 0x6208, 0xa9af, 0x620a, 0, 0xa9b0, 0, 0, 0x620d, 0x6cc0, 0x620e, 0x6cc1,
    0x620b, 0x620c, 0x6cc2, 0xa9b1, 0x6209, 0x6207, 0, 0, 0, 0xa9ad, 0x6201, 0, 0, 0, 0, 0xa9a9,
    0, 0, 0, 0, 0, 0, 0x552f, 0x4935, 0, 0, 0, 0x6215, 0, 0x6212, 0, 0x6217,
    0xa9b4, 0xa9b5, 0x6216, 0, 0x53d3, 0x5607, 0, 0x4d9b, 0x6210, 0x6219, 0x6214, 0xa9b6, 0x6213, 0x620f, 0x6cc3, 0x6211,
    0, 0x4a29, 0, 0, 0, 0, 0, 0, 0, 0, 0x519d, 0, 0, 0x505d, 0, 0xa9b8,
    0, 0x5402, 0, 0, 0x621e, 0xa9b9, 0, 0, 0x5404, 0, 0, 0, 0xa9ba, 0, 0, 0,
    0x5041, 0x621b, 0, 0, 0x542f, 0xa9bb, 0x621f, 0x5533, 0, 0x51bb, 0xa9bc, 0x621a, 0x621c, 0, 0, 0x621d,
    0, 0, 0, 0, 0xa9bf, 0, 0xa9c0, 0x6cc5, 0, 0x6cc6, 0xa9c1, 0, 0, 0x6220, 0, 0,
    0x4e24, 0, 0, 0, 0x5326, 0x6225, 0x6224, 0, 0, 0x6221, 0xa9c2, 0, 0, 0x5796, 0, 0,
    0xa9c3, 0, 0, 0x622a, 0, 0, 0x622e, 0x622b, 0, 0, 0, 0, 0, 0, 0, 0,
    0x6227, 0x6cc7, 0, 0xa9c4, 0, 0, 0, 0x6228, 0, 0, 0, 0xa9c5, 0, 0x622d, 0xa9c6, 0xa9c7,
    0, 0x6222, 0x5935, 0x6229, 0x6223, 0, 0, 0x622c, 0, 0, 0, 0, 0, 0, 0x6cc9, 0x6232,
    0x6cca, 0x4a2a, 0, 0x622f, 0, 0, 0xa9c8, 0x6230, 0, 0, 0x6231, 0x6234, 0, 0, 0, 0,
    0, 0x6cc8, 0, 0x6ccb, 0, 0, 0x6ccc, 0x6233, 0x5456, 0, 0, 0, 0, 0x6235, 0x575c, 0x554d,
    0x623a, 0, 0, 0x6237, 0, 0xa9c9, 0, 0, 0, 0, 0xa9ca, 0, 0x6236, 0x5032, 0, 0x6239,
    0x623b, 0xa9cb, 0, 0, 0x6238, 0, 0x623f, 0xa9cc, 0x623c, 0x6ccf, 0, 0, 0, 0, 0xa9cd, 0x623d,
    0x6226, 0xa9ce, 0, 0, 0x623e, 0x6240, 0, 0, 0, 0xa9cf, 0, 0, 0x6241, 0x6cd0, 0xa9d0, 0xa9d1,
    0xa9d2, 0, 0, 0x5526, 0, 0x6242, 0, 0, 0, 0x6cd1, 0, 0, 0, 0, 0x5642, 0,
    0, 0x4b2e, 0x4b89, 0x6243, 0, 0, 0, 0, 0, 0x5514, 0, 0x4fc8, 0, 0x5610, 0, 0x6cd2,
    0x6244, 0, 0x5713, 0, 0x6cd3, 0x53d4, 0, 0x50a6, 0x5394, 0, 0, 0x4ead, 0, 0, 0, 0x4820,
    0x6cd4, 0x6249, 0x6247, 0, 0x6245, 0x4a01, 0xa9d6, 0x4f31, 0x624a, 0, 0, 0x6248, 0, 0x6246, 0x624e, 0,
    0, 0x624d, 0x624c, 0x624b, 0, 0, 0xa9d8, 0xa9d9, 0, 0x624f, 0, 0, 0x6cd5, 0x6250, 0x501a, 0xa9da,
    0x6251, 0, 0x6253, 0, 0xa9dc, 0x6252, 0, 0, 0xa9de, 0, 0x4c32, 0, 0, 0xaa01, 0x5098, 0,
    0, 0, 0x6255, 0, 0, 0x6cd6, 0x52dc, 0xaa03, 0x6254, 0x6cd7, 0, 0, 0x6256, 0x6cd8, 0x5515, 0x50cc,
    0x4ca7, 0, 0x6257, 0, 0, 0, 0xaa05, 0x5728, 0, 0, 0, 0xaa06, 0, 0, 0, 0x6259,
    0, 0, 0x625a, 0, 0x625b, 0xaa08, 0x625c, 0, 0x4dc5, 0, 0x625d, 0x4baf, 0, 0, 0x4aca, 0,
    0x4a8a, 0, 0x6281, 0xaa09, 0x5653, 0x4ca8, 0x625e, 0x6cd9, 0x6cda, 0xaa0a, 0x6284, 0x5646, 0, 0x539c, 0, 0,
    0x5493, 0, 0xaa0c, 0x6cdb, 0x4ec3, 0x6283, 0, 0x4e33, 0x4ca9, 0x4dc6, 0x4ac9, 0x5516, 0x6282, 0x6cdc, 0xaa0d, 0,
    0x50a7, 0x55a2, 0x4d57, 0x6cdd, 0, 0, 0, 0, 0, 0, 0, 0x4dc7, 0x523d, 0, 0x6287, 0x573f,
    0x4d39, 0x6cde, 0x6288, 0x4fa2, 0, 0x628a, 0, 0, 0, 0x4f32, 0x4d10, 0, 0, 0xaa10, 0xaa11, 0x6289,
    0xaa12, 0x6d01, 0x4e8a, 0x4c1e, 0x50a8, 0x6285, 0x628b, 0xaa13, 0x6d02, 0, 0, 0x6286, 0x4bb0, 0, 0x628e, 0x6292,
    0x4bcb, 0, 0, 0x6d03, 0, 0, 0x628d, 0, 0, 0xaa17, 0xaa18, 0x6296, 0x6d04, 0, 0x4caa, 0,
    0, 0x56cd, 0x481c, 0x6293, 0, 0, 0x4acb, 0, 0x6290, 0, 0xaa19, 0, 0, 0, 0x6291, 0,
    0xaa1a, 0x52dd, 0x628f, 0x628c, 0, 0x4988, 0x5044, 0, 0, 0x4c08, 0x6d05, 0, 0, 0x6298, 0, 0xaa1c,
    0, 0, 0, 0x6d06, 0, 0, 0xaa1e, 0, 0xaa1f, 0x6295, 0, 0x6d07, 0xaa20, 0, 0, 0x6297,
    0, 0, 0, 0x6294, 0, 0, 0, 0xaa21, 0, 0x4bb1, 0x5113, 0x6299, 0x50ce, 0xaa23, 0, 0x62a6,
    0x6d08, 0, 0x62a2, 0x629c, 0, 0, 0x6d09, 0xaa24, 0, 0, 0xaa25, 0x62a0, 0x4e5a, 0x483d, 0x629b, 0x62a3,
    0x62a7, 0x4cab, 0x5636, 0, 0x5236, 0x629d, 0xaa26, 0xaa27, 0x62a5, 0, 0x629a, 0x519e, 0, 0x629f, 0x481d, 0x562a,
    0xaa28, 0, 0x6d0a, 0, 0, 0, 0, 0x629e, 0, 0, 0x4b3b, 0x544c, 0x6d0b, 0, 0, 0x50cd,
    0, 0x5730, 0x4ecf, 0, 0, 0x62ce, 0x6d0c, 0xaa29, 0x62a8, 0xaa2a, 0x505e, 0, 0x62a4, 0x62a9, 0x62ab, 0,
    0x5259, 0x62ae, 0, 0x6d0d, 0x62aa, 0, 0xaa2b, 0, 0x5534, 0x4a2b, 0, 0, 0x562b, 0, 0, 0x483e,
    0, 0xaa2c, 0x62ad, 0, 0x575d, 0, 0, 0, 0, 0xaa2d, 0, 0x62ac, 0, 0, 0, 0,
    0, 0x48cf, 0, 0, 0x534c, 0x62af, 0, 0, 0x6d10, 0x62b6, 0x62b0, 0x62b7, 0, 0, 0, 0,
    0xaa31, 0x6d11, 0x62b3, 0, 0, 0x6d12, 0, 0xaa32, 0, 0, 0, 0x53db, 0, 0xaa33, 0x4e2a, 0x62b5,
    0xaa34, 0x62b2, 0x62b8, 0x62b1, 0, 0, 0x4ea4, 0xaa35, 0x6d0f, 0, 0, 0x5585, 0xaa36, 0, 0x4eac, 0,
    0, 0x62b4, 0x62c0, 0, 0, 0x62bc, 0, 0x62bf, 0, 0x62bd, 0x62c1, 0x62bb, 0, 0x62a1, 0x5033, 0,
    0, 0x542b, 0, 0x62be, 0, 0xaa37, 0x62b9, 0x6d14, 0, 0, 0x5081, 0x4bb2, 0, 0x4e8b, 0, 0,
    0, 0, 0x6d15, 0, 0x4f85, 0x5096, 0x62c4, 0, 0, 0x62c6, 0x62c7, 0, 0, 0x62c3, 0x62c5, 0,
    0, 0x6d16, 0, 0, 0, 0, 0x62ba, 0x62c2, 0, 0x62ca, 0x62c9, 0x6f5e, 0, 0x55da, 0, 0,
    0x4b8b, 0, 0, 0xaa38, 0, 0xaa39, 0, 0, 0, 0x62c8, 0, 0x62cc, 0x62cb, 0x62cf, 0xaa3a, 0x62d1,
    0, 0, 0x4d9c, 0x62cd, 0, 0, 0xaa3b, 0xaa3c, 0x62d2, 0x62d3, 0x6d17, 0, 0x62d4, 0x6d18, 0x62da, 0x529b,
    0x62d6, 0xaa3e, 0x62d5, 0x62d7, 0x62d8, 0, 0x62d9, 0, 0xaa3f, 0, 0xaa40, 0x62db, 0x62dc, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0x4a2c, 0, 0x62dd, 0, 0x62de, 0xaa43, 0xaa42, 0, 0xaa44, 0,
    0, 0, 0, 0xaa45, 0xaa46, 0x6301, 0, 0x6d19, 0, 0, 0, 0, 0x6302, 0x6303, 0x6304, 0xaa47,
    0x6305, 0x6306, 0xaa4a, 0, 0x6308, 0x6307, 0, 0, 0x6309, 0, 0, 0, 0, 0, 0, 0x630a,
    0x630b, 0xaa4c, 0, 0xaa4d, 0xaa4e, 0, 0, 0x630e, 0x630c, 0x630d, 0x4d41, 0x4bb3, 0, 0xaa4f, 0x51b6, 0,
    0x5413, 0, 0x4ed0, 0, 0, 0x53ad, 0, 0x544d, 0x630f, 0x5c4d, 0, 0, 0, 0xaa50, 0xaa51, 0,
    0, 0, 0x6310, 0x6312, 0, 0x56c5, 0x6311, 0x6314, 0x6313, 0, 0x56b3, 0, 0x6315, 0, 0x545e, 0,
    0xaa53, 0x6d1b, 0, 0, 0x6316, 0, 0xaa56, 0x6d1c, 0, 0, 0x6319, 0, 0xaa57, 0x6318, 0x6317, 0,
    0, 0, 0, 0x631a, 0x4b92, 0, 0, 0, 0x5082, 0x4aa1, 0, 0, 0, 0xaa58, 0x631e, 0x631b,
    0, 0, 0x631c, 0, 0, 0, 0x631f, 0, 0x6320, 0x631d, 0, 0, 0, 0x4889, 0, 0x6d1d,
    0, 0x4907, 0, 0xaa5a, 0, 0x6322, 0x6323, 0, 0, 0, 0x6324, 0, 0x56c2, 0, 0x6d1e, 0xaa5b,
    0, 0, 0x4e8c, 0, 0x6326, 0x6325, 0, 0, 0, 0, 0, 0x6d1f, 0, 0, 0, 0x6d20,
    0x4fc9, 0x6327, 0, 0xaa5c, 0, 0xaa5d, 0x6328, 0, 0, 0x6329, 0, 0x4a45, 0x6d21, 0, 0x6d22, 0xaa5e,
    0x4a2d, 0, 0xaa81, 0x632a, 0, 0, 0, 0, 0, 0x632b, 0x6d23, 0x55bd, 0x56c3, 0, 0, 0,
    0x56b4, 0x5797, 0xaa82, 0x4cad, 0x632e, 0x4e34, 0x632d, 0, 0xaa84, 0, 0xaa83, 0x632f, 0x4e09, 0, 0xaa85, 0,
    0x5131, 0xaa86, 0x6330, 0, 0x6d25, 0x4cac, 0xaa87, 0x5637, 0x6331, 0x6332, 0, 0, 0x6333, 0, 0, 0,
    0, 0x6334, 0, 0, 0xaa88, 0, 0x6d26, 0, 0x6335, 0, 0, 0, 0xaa89, 0, 0, 0,
    0xaa8a, 0, 0, 0x4e0a, 0, 0x6d27, 0x564d, 0x6d28, 0, 0, 0, 0x6337, 0x6d29, 0x519f, 0, 0x6336,
    0, 0, 0, 0xaa8b, 0, 0, 0x6339, 0, 0, 0, 0x6338, 0, 0, 0, 0, 0,
    0, 0, 0x633a, 0, 0, 0, 0x501b, 0, 0x633b, 0, 0x633c, 0, 0, 0, 0x5519, 0x633d,
    0, 0x50cf, 0x633e, 0, 0, 0, 0xaa8c, 0, 0x633f, 0, 0, 0, 0, 0, 0, 0x575e,
    0x6342, 0xaa8d, 0x6341, 0x6340, 0x5210, 0xaa8e, 0x6343, 0x4f86, 0, 0x6344, 0, 0xaa8f, 0, 0x6345, 0x5798, 0x6346,
    0, 0, 0, 0, 0x6347, 0x6349, 0x6348, 0x5405, 0, 0x5359, 0, 0x579e, 0x5409, 0, 0, 0,
    0, 0, 0, 0x634b, 0, 0, 0x4f33, 0, 0x548a, 0xaa90, 0x634c, 0x634a, 0xaa91, 0x4a2e, 0, 0,
    0, 0x4c34, 0x4dc8, 0, 0xaa92, 0x544e, 0, 0xaa93, 0, 0x4c0a, 0x55a3, 0, 0x634f, 0x634d, 0, 0x4cae,
    0, 0x4caf, 0x4849, 0, 0x4d48, 0, 0, 0, 0xaa94, 0, 0x53b9, 0, 0, 0, 0, 0,
    0, 0, 0, 0x483f, 0x6354, 0xaa96, 0x51a0, 0, 0, 0, 0x6d2a, 0, 0x53b8, 0, 0x513b, 0,
    0, 0, 0, 0, 0, 0xaa97, 0x6356, 0x6d2b, 0xaa98, 0x6352, 0x6355, 0x6350, 0, 0x6353, 0x5586, 0,
    0x6d2c, 0x4c35, 0, 0, 0x485d, 0x6351, 0xaa99, 0, 0, 0, 0, 0, 0, 0, 0, 0x6358,
    0, 0x6359, 0, 0x6d2d, 0x5319, 0xaa9c, 0, 0, 0x4b1b, 0, 0, 0xaa9d, 0x6386, 0x539d, 0, 0,
    0, 0, 0x4dc9, 0, 0, 0x4b1c, 0x5028, 0x57a6, 0x560e, 0x6357, 0x5034, 0, 0, 0xaa9b, 0, 0,
    0, 0, 0, 0, 0, 0, 0xaaa0, 0, 0x6d2e, 0, 0x4ab3, 0x635a, 0, 0, 0xaaa1, 0,
    0, 0, 0, 0x635c, 0xaaa3, 0, 0, 0xaaa4, 0, 0x635b, 0, 0, 0xaaa5, 0, 0, 0x635d,
    0, 0x5186, 0, 0x539e, 0, 0xaa9f, 0, 0, 0, 0x5211, 0, 0, 0, 0xaaa7, 0x6383, 0,
    0, 0, 0, 0, 0, 0, 0x6382, 0, 0, 0, 0x6d2f, 0x635e, 0, 0, 0x4fb5, 0,
    0x54c5, 0x6385, 0, 0x6384, 0x4cb0, 0x57b3, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x6395,
    0x6d30, 0, 0, 0, 0, 0x6389, 0x638a, 0x6d31, 0x6d32, 0xaaa9, 0, 0x4e50, 0, 0x6d33, 0x6388, 0,
    0x4cd8, 0x6387, 0, 0, 0x638b, 0, 0, 0, 0x5212, 0x5502, 0x5083, 0, 0, 0, 0, 0x513c,
    0x638f, 0xaaab, 0x6390, 0x638c, 0xaaad, 0xaaae, 0, 0, 0x638d, 0, 0x638e, 0, 0, 0, 0, 0x4cb1,
    0, 0, 0, 0x6396, 0, 0x6392, 0, 0, 0xaab0, 0, 0x54c6, 0, 0x55cc, 0x5488, 0, 0,
    0x6391, 0, 0, 0x6394, 0x6393, 0, 0, 0, 0x55a4, 0x6397, 0, 0, 0, 0, 0, 0,
    0x6398, 0, 0xaab1, 0x5097, 0, 0x6399, 0, 0, 0x639b, 0, 0x639f, 0x6d34, 0, 0x639c, 0x639a, 0x539f,
    0x639d, 0xaab2, 0x639e, 0xaab3, 0, 0, 0x4912, 0, 0x63a5, 0x63a0, 0x6d35, 0, 0, 0x63a1, 0, 0x6d36,
    0, 0x63a2, 0, 0x5101, 0, 0, 0xaab4, 0x6d37, 0x63a4, 0x63a3, 0x63a6, 0xaab5, 0, 0, 0, 0x63a7,
    0x63a8, 0, 0, 0x4fa3, 0xaab7, 0x4949, 0, 0x63a9, 0x5737, 0, 0x4e0b, 0, 0xaab9, 0x4e8d, 0, 0,
    0, 0, 0, 0x4dca, 0x51b7, 0, 0, 0, 0, 0, 0x63aa, 0x63ab, 0x4891, 0xaabb, 0x63ac, 0xaabc,
    0, 0x63ad, 0x63ae, 0, 0xaabe, 0x63af, 0, 0x63b0, 0x4b1d, 0x5d0a, 0x63b1, 0, 0x5045, 0x63b2, 0x4e2b, 0,
    0x63b3, 0, 0x5810, 0, 0, 0, 0x63b4, 0x553e, 0x4a3c, 0xaac0, 0, 0x5084, 0x4eb8, 0, 0x54d1, 0x4e8e,
    0, 0xaac1, 0xaac2, 0, 0, 0, 0, 0, 0, 0x63b5, 0x4cb2, 0x63b6, 0x542c, 0, 0x63c4, 0,
    0, 0, 0xaac4, 0x63b8, 0xaac5, 0x5129, 0x53d5, 0x4c1f, 0x63b7, 0x5085, 0, 0, 0xaac6, 0, 0, 0,
    0x63b9, 0, 0, 0, 0, 0xaac9, 0xaac7, 0x525a, 0, 0xaac8, 0, 0xaacb, 0, 0, 0, 0xaacd,
    0, 0, 0, 0, 0, 0, 0, 0xaacf, 0x63bb, 0x63ba, 0x63bd, 0, 0xaad1, 0x63bc, 0, 0x63be,
    0x6d3b, 0, 0x63c0, 0xaad2, 0x63bf, 0, 0x4a2f, 0, 0x63c1, 0, 0x63c2, 0x63c3, 0, 0, 0x4d11, 0x5729,
    0, 0x63c5, 0x4f87, 0, 0x6d3c, 0, 0x48d0, 0x63c6, 0x63c7, 0xaad6, 0, 0, 0, 0xaad8, 0x63c8, 0xaad9,
    0, 0, 0, 0xaada, 0, 0, 0, 0, 0, 0, 0xaadb, 0x4852, 0, 0x63c9, 0x6d3e, 0,
    0, 0, 0x63ca, 0xaadc, 0, 0, 0, 0, 0, 0x54c7, 0, 0, 0, 0x4e27, 0, 0x63cc,
    0, 0x6d3f, 0, 0x6d40, 0x6d41, 0x4989, 0x4812, 0xaadd, 0xaade, 0x6d42, 0, 0x63cb, 0x63ce, 0x53ae, 0x6d43, 0x4fa4,
    0, 0x4936, 0xab01, 0x5587, 0xab02, 0, 0, 0x6d44, 0x4bbd, 0x4b3c, 0xab03, 0x63cd, 0xab04, 0x494a, 0x6d45, 0x6d46,
    0, 0, 0, 0, 0, 0x4a03, 0x6d47, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0x48d1, 0x63d2, 0x574a, 0x513d, 0x6d48, 0, 0x54a4, 0, 0x63de, 0, 0x4937, 0x63dc, 0, 0x63da, 0x63d1,
    0, 0x63cf, 0xab05, 0x63d0, 0, 0x4e43, 0x4b4c, 0x51d7, 0xab06, 0, 0, 0x5331, 0, 0, 0, 0,
    0, 0x48b1, 0, 0x63d4, 0x63d3, 0, 0, 0xab07, 0, 0x63d9, 0x63d5, 0x63d8, 0, 0x6d49, 0x6d4a, 0,
    0x6d4b, 0x6d4c, 0x5630, 0x63d7, 0x4938, 0x49dd, 0x63db, 0xab08, 0xab09, 0x63dd, 0, 0, 0xab0a, 0, 0x4bb4, 0,
    0, 0, 0, 0, 0, 0, 0x6403, 0x640c, 0x640d, 0, 0, 0xab0c, 0x480b, 0xab0d, 0, 0,
    0, 0, 0x6d4e, 0x6414, 0, 0, 0, 0, 0x4851, 0, 0, 0x640b, 0, 0x6d4f, 0, 0x640a,
    0xab0e, 0x6405, 0x6404, 0, 0x6402, 0x6401, 0x51c3, 0, 0x515b, 0x6407, 0x6d50, 0, 0xab0f, 0, 0, 0,
    0x6406, 0, 0, 0x6d51, 0xab10, 0x6409, 0, 0x6d52, 0, 0x50d0, 0x4bb5, 0, 0, 0, 0, 0x48a1,
    0x6408, 0x6d53, 0x4cb3, 0, 0xab0b, 0x6d54, 0, 0xab11, 0x50d1, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x6d4d, 0x872a, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0x641a, 0, 0x641b, 0, 0x4939, 0, 0, 0, 0x490e, 0x6418, 0x6d55, 0, 0xab13,
    0, 0, 0, 0, 0, 0x640e, 0x6d56, 0x6416, 0, 0x641d, 0x6417, 0, 0, 0xab16, 0x6415, 0,
    0, 0, 0x6d57, 0x63d6, 0xab17, 0xab18, 0x6413, 0, 0x6d58, 0, 0x640f, 0xab19, 0, 0xab1a, 0x4a30, 0x6411,
    0x641c, 0, 0x6412, 0, 0, 0, 0, 0x6d59, 0x641e, 0x6d5a, 0x6410, 0x53dc, 0, 0, 0, 0,
    0, 0x56c9, 0, 0, 0, 0x6419, 0, 0, 0, 0, 0, 0, 0, 0x642f, 0, 0x6d5b,
    0x6d5c, 0x6427, 0, 0, 0, 0x4fdb, 0, 0x6d5d, 0, 0xab1b, 0x4aa6, 0, 0x4b3d, 0, 0x6422, 0x6d5e,
    0xab1c, 0x6d81, 0, 0x493b, 0xab1d, 0, 0x4f34, 0, 0x6425, 0, 0, 0, 0x4d3a, 0xab1e, 0, 0x52b1,
    0x642a, 0x6d82, 0, 0, 0, 0xab1f, 0, 0, 0, 0x554e, 0x6d83, 0x6421, 0, 0, 0, 0x493a,
    0x4c36, 0x5489, 0x642b, 0, 0x641f, 0, 0, 0x6428, 0, 0xab20, 0, 0x6432, 0, 0x6423, 0, 0,
    0, 0x6d84, 0, 0x6424, 0x531a, 0, 0x6d85, 0x6429, 0, 0, 0x6d86, 0x6426, 0x5588, 0x642c, 0x4840, 0xab21,
    0, 0xab22, 0, 0x6420, 0, 0xab23, 0, 0xab25, 0, 0, 0, 0, 0, 0, 0, 0,
    0x642e, 0, 0x642d, 0, 0, 0, 0, 0, 0, 0x53cb, 0x6434, 0, 0x643f, 0, 0, 0,
    0, 0x49de, 0, 0, 0, 0x6442, 0, 0, 0x6430, 0xab26, 0, 0, 0x6435, 0x56ce, 0, 0,
    0, 0, 0, 0, 0, 0, 0x643e, 0, 0x6d88, 0x56b5, 0xab27, 0, 0, 0, 0x570a, 0xab28,
    0, 0xab29, 0xab2a, 0, 0, 0, 0, 0x51d8, 0, 0xab2b, 0xab2c, 0x49cb, 0xab2d, 0, 0, 0x6d89,
    0, 0x54d2, 0x6444, 0x5301, 0, 0xab2f, 0x4811, 0, 0, 0x643d, 0, 0x6439, 0x50d2, 0x6433, 0x643b, 0x6440,
    0x6d8a, 0x538c, 0, 0x6d8b, 0, 0x480a, 0xab30, 0x6438, 0xab31, 0x6441, 0x54d8, 0, 0xab32, 0, 0, 0,
    0, 0xab33, 0x643c, 0, 0x6437, 0x6d8c, 0, 0, 0, 0, 0, 0x4f35, 0, 0, 0, 0,
    0x4e8f, 0, 0, 0, 0x4e0c, 0, 0, 0xab36, 0, 0x5638, 0, 0, 0x54a7, 0, 0x6d8d, 0x6447,
    0, 0x6450, 0, 0, 0, 0, 0xab37, 0, 0, 0, 0, 0, 0, 0x643a, 0, 0x6d8e,
    0, 0, 0x49d7, 0, 0x6d8f, 0, 0, 0, 0x4f58, 0x6445, 0x6d90, 0x644a, 0x50d3, 0, 0xab38, 0x6446,
    0x6d91, 0x644d, 0x6d92, 0, 0x51bf, 0, 0x644e, 0, 0, 0x56b6, 0x6443, 0x4998, 0, 0x6449, 0xab3a, 0xab3b,
    0x644c, 0x560c, 0, 0xab3c, 0, 0, 0x644f, 0, 0, 0x6448, 0x644b, 0, 0xab35, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0xab3e, 0, 0, 0xab3f, 0, 0x5589, 0, 0x5781, 0xab40,
    0xab41, 0xab42, 0, 0, 0x6453, 0, 0, 0, 0, 0, 0xab43, 0, 0x645a, 0xab44, 0, 0x6452,
    0x4e23, 0, 0, 0, 0, 0, 0x6431, 0, 0, 0, 0, 0, 0xab45, 0, 0, 0,
    0, 0x552e, 0, 0x5602, 0x6459, 0x6458, 0, 0x6454, 0x6455, 0, 0x4896, 0xab46, 0, 0, 0x6d95, 0x6457,
    0, 0x6451, 0, 0x6d96, 0xab47, 0xab48, 0x5235, 0, 0, 0, 0, 0xab49, 0x6456, 0x485e, 0, 0x6d97,
    0, 0, 0x6d94, 0, 0xab4a, 0x5102, 0, 0, 0, 0, 0, 0, 0, 0x5523, 0xab4f, 0,
    0x645b, 0x6481, 0, 0x5439, 0, 0, 0, 0, 0x645e, 0x4f36, 0x4e29, 0x6483, 0, 0, 0x4b1e, 0xab4b,
    0, 0xab50, 0, 0xab51, 0, 0x6484, 0, 0x54d9, 0x645d, 0x6d98, 0x6436, 0, 0, 0, 0xab52, 0,
    0, 0xab53, 0xab54, 0x645c, 0x6d99, 0, 0, 0, 0x57af, 0x5302, 0x54d3, 0, 0, 0x648b, 0, 0xab4c,
    0, 0, 0, 0, 0, 0, 0, 0x6491, 0, 0, 0x6d9c, 0xab56, 0, 0xab57, 0x6492, 0xab58,
    0x6485, 0xab59, 0, 0, 0x53d6, 0, 0xab5a, 0x648f, 0x6487, 0, 0x6489, 0, 0x6d9d, 0, 0, 0x6d9e,
    0x6493, 0x6488, 0, 0xab5b, 0x648c, 0, 0, 0x48d2, 0, 0x5345, 0, 0x648d, 0x6490, 0xab5c, 0, 0xab5d,
    0, 0, 0x6d9f, 0, 0x6486, 0, 0x5086, 0, 0x648a, 0x4d87, 0x4fa5, 0x4b90, 0x5654, 0x6d9b, 0x5659, 0x4ed2,
    0x6da0, 0, 0, 0, 0, 0, 0, 0xab83, 0, 0x6497, 0x6495, 0, 0xab84, 0, 0, 0,
    0, 0x57ae, 0, 0, 0, 0, 0, 0xab85, 0, 0x6494, 0xab86, 0x6da1, 0, 0x56d5, 0x6da2, 0x6496,
    0x6498, 0, 0, 0, 0, 0x6499, 0, 0, 0xab87, 0xab88, 0, 0, 0x649c, 0x649a, 0, 0xab89,
    0, 0xab8a, 0, 0, 0x5303, 0x649b, 0xab8b, 0, 0, 0x542d, 0x648e, 0, 0, 0x6da3, 0, 0,
    0, 0, 0, 0, 0, 0, 0xab8c, 0x4ed3, 0, 0x649d, 0x64a2, 0x50d4, 0, 0, 0x64a1, 0x6da5,
    0xab8d, 0, 0x6482, 0, 0x6da6, 0x6da7, 0x64a3, 0x50a9, 0, 0, 0x649e, 0x64a0, 0, 0, 0, 0,
    0x6da8, 0xab8e, 0x6da4, 0x649f, 0, 0, 0x5e91, 0x5e82, 0x6daa, 0, 0x64a5, 0, 0, 0, 0xab8f, 0,
    0, 0xab90, 0x64a4, 0, 0xab91, 0, 0, 0xab92, 0, 0x6dab, 0, 0, 0, 0x56d6, 0, 0x611c,
    0x64a6, 0, 0, 0, 0, 0, 0, 0, 0x6dac, 0xab94, 0, 0, 0xab95, 0, 0, 0x64a7,
    0xab97, 0x47c8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x64a8, 0x4c37, 0,
    0x4ab4, 0, 0, 0xab99, 0x64aa, 0x58bd, 0xab9a, 0x6dad, 0, 0, 0x4ad5, 0x6dae, 0x571a, 0, 0x4b53, 0x64ab,
    0, 0, 0x6db0, 0, 0, 0, 0, 0x64ac, 0, 0, 0, 0x51ce, 0x6db2, 0, 0, 0xab9b,
    0, 0x64ad, 0, 0, 0, 0x6db3, 0, 0xab9c, 0, 0x535a, 0xab9d, 0x481a, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0xab9e, 0, 0xab9f, 0x4943, 0x64b2, 0x64b3, 0xaba0, 0, 0,
    0, 0xaba1, 0, 0x64ae, 0, 0x4d9d, 0, 0, 0x6db4, 0, 0, 0, 0xaba2, 0xaba3, 0, 0,
    0, 0, 0, 0x64af, 0x53a2, 0, 0, 0, 0xaba4, 0x64b0, 0x64b1, 0x64bb, 0, 0, 0, 0x64b5,
    0x64b8, 0xaba6, 0, 0xaba7, 0, 0, 0x64b4, 0, 0x6db5, 0, 0, 0, 0, 0, 0, 0,
    0, 0xaba8, 0, 0xaba9, 0x64b6, 0, 0x64b7, 0x4e38, 0, 0x64b9, 0, 0x51a1, 0, 0x4bb6, 0x49a2, 0,
    0, 0xabaa, 0, 0, 0x64bc, 0xabab, 0, 0xabac, 0, 0x499f, 0, 0x64c1, 0, 0, 0x64bd, 0x64c0,
    0, 0, 0, 0xabad, 0x541a, 0, 0xabae, 0, 0, 0x64be, 0, 0, 0x64bf, 0x54a8, 0x543a, 0x64c2,
    0, 0, 0, 0, 0, 0, 0, 0, 0x515d, 0x64cc, 0x6db6, 0x64c8, 0x6db7, 0x6db8, 0x494b, 0,
    0x64c6, 0, 0x558a, 0x64c7, 0, 0xabb0, 0x64c4, 0xabb1, 0x64c5, 0x64ca, 0x64cd, 0x6db9, 0, 0x64cb, 0xabb2, 0,
    0xabb3, 0x64c9, 0x64c3, 0xabb4, 0, 0, 0, 0, 0x51b8, 0xabb5, 0x64d4, 0, 0x560a, 0, 0, 0xabb6,
    0, 0xabb7, 0, 0xabb8, 0, 0x64d2, 0, 0, 0, 0x64d3, 0, 0, 0, 0, 0, 0,
    0, 0xabb9, 0, 0, 0x64ce, 0, 0, 0x64d0, 0, 0, 0xabba, 0x64d1, 0, 0, 0xabbb, 0x64cf,
    0xabbc, 0, 0, 0xabbd, 0, 0, 0, 0, 0, 0x5046, 0, 0x5799, 0x64d8, 0, 0x64d9, 0,
    0, 0xabbe, 0, 0x6501, 0, 0x4f8a, 0, 0x64db, 0xabbf, 0x64de, 0, 0, 0, 0, 0, 0x64d6,
    0x64d5, 0, 0, 0x6502, 0xabc0, 0xabc1, 0x493c, 0, 0x64dc, 0, 0x6503, 0, 0, 0, 0x64dd, 0,
    0, 0x6dba, 0xabc2, 0, 0x64da, 0, 0x5213, 0, 0x64d7, 0, 0, 0, 0xabc3, 0, 0, 0x53c8,
    0, 0, 0x6507, 0, 0, 0, 0, 0x6dbb, 0x6dbc, 0xabc7, 0, 0xabc8, 0, 0x569b, 0, 0,
    0, 0, 0, 0xabc9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x6506,
    0xabca, 0, 0x6505, 0, 0, 0, 0, 0xabc6, 0, 0, 0, 0x650e, 0x6dbd, 0x6dbe, 0, 0x6508,
    0, 0, 0, 0x6510, 0, 0x6dbf, 0, 0, 0, 0, 0x56c6, 0x6513, 0, 0x650a, 0xabcd, 0,
    0x650b, 0xabcf, 0, 0, 0x650f, 0, 0x6512, 0x6511, 0, 0, 0, 0x6509, 0, 0, 0xabd0, 0,
    0x650c, 0, 0x651d, 0, 0, 0, 0x6dc1, 0, 0, 0, 0, 0, 0, 0, 0, 0xabd2,
    0x6516, 0, 0, 0xabd4, 0, 0xabd5, 0xabd6, 0, 0, 0, 0xabd7, 0xabd8, 0x6dc2, 0xabd9, 0, 0x6514,
    0, 0, 0x6515, 0, 0, 0xabd1, 0x651a, 0x651b, 0, 0x498a, 0, 0x4aa2, 0, 0, 0x6519, 0,
    0, 0xabda, 0, 0xabdb, 0, 0x6504, 0x6dc3, 0, 0, 0, 0x6dc4, 0xabdc, 0, 0x6518, 0x651c, 0x6517,
    0x6dc5, 0x651e, 0, 0xabdd, 0x6dc6, 0x6520, 0x651f, 0, 0, 0, 0, 0, 0, 0, 0, 0x6dc7,
    0, 0x6522, 0x6521, 0x64ba, 0, 0, 0, 0x6526, 0xabde, 0, 0, 0, 0, 0, 0xac01, 0,
    0, 0x6523, 0xac02, 0, 0, 0, 0x6524, 0, 0, 0x6525, 0, 0x6527, 0xac03, 0, 0, 0,
    0x4bcc, 0, 0x6529, 0, 0x6528, 0, 0x4e90, 0, 0, 0, 0xac05, 0, 0x4cb4, 0x5f07, 0, 0,
    0, 0, 0x652a, 0x4eb1, 0, 0, 0, 0x4999, 0xac06, 0x652b, 0, 0x48b2, 0, 0x4f37, 0x652c, 0xac07,
    0, 0x4cb5, 0x652d, 0x4841, 0xac08, 0, 0, 0, 0x549d, 0xac0b, 0, 0x652e, 0, 0, 0, 0xac0d,
    0x4fca, 0, 0x6535, 0, 0, 0x6532, 0, 0x51cf, 0, 0, 0, 0, 0, 0x6533, 0x6530, 0x4b3e,
    0, 0x652f, 0x6536, 0, 0, 0, 0, 0, 0x4b96, 0, 0, 0x513e, 0, 0x653c, 0, 0,
    0, 0, 0x6538, 0, 0, 0, 0x5115, 0x6537, 0x6dc8, 0x653a, 0, 0, 0, 0, 0x6531, 0,
    0xac0e, 0, 0x653b, 0, 0x653d, 0, 0, 0, 0, 0, 0x6dc9, 0x544f, 0, 0, 0x6539, 0,
    0x653e, 0x6540, 0, 0, 0x4c33, 0x6534, 0, 0x4821, 0, 0, 0, 0, 0xac0f, 0xac10, 0xac11, 0x653f,
    0xac12, 0x4d3b, 0x5756, 0x6541, 0x6542, 0x50d5, 0, 0, 0, 0, 0x6dca, 0, 0, 0, 0x6dcb, 0x5702,
    0, 0xac15, 0xac13, 0xac16, 0x6543, 0x5695, 0, 0, 0x6544, 0x6545, 0, 0xac17, 0x5544, 0x6546, 0, 0x4d20,
    0, 0x5703, 0, 0, 0, 0, 0, 0, 0x654b, 0, 0, 0, 0, 0, 0, 0,
    0xac18, 0xac19, 0x654c, 0x4f38, 0x654a, 0x6dcd, 0, 0, 0x56c7, 0x6547, 0, 0, 0x6549, 0x501d, 0x4fde, 0,
    0, 0xac1b, 0x6548, 0, 0x654d, 0, 0, 0x5503, 0, 0, 0x654f, 0, 0x654e, 0, 0, 0,
    0x49cc, 0, 0x558b, 0x6550, 0, 0, 0, 0, 0x6dd0, 0x6dd1, 0x6dd2, 0, 0x6dce, 0x655c, 0x6552, 0,
    0, 0, 0, 0, 0, 0x6553, 0, 0x6dd3, 0, 0, 0x6554, 0x6555, 0, 0, 0, 0,
    0x6dd4, 0, 0x6dd5, 0, 0, 0, 0x6559, 0xac1d, 0x655a, 0x6dd6, 0, 0x6558, 0, 0, 0, 0,
    0x6dd7, 0x6556, 0xac1f, 0x6551, 0x6557, 0xac20, 0, 0, 0, 0xac21, 0, 0, 0x655b, 0x6817, 0, 0,
    0, 0, 0, 0, 0, 0, 0x4908, 0, 0, 0, 0, 0, 0, 0, 0x655e, 0x4b3f,
    0x655d, 0, 0xac24, 0, 0x6582, 0, 0x6581, 0, 0, 0, 0x6584, 0, 0, 0x6583, 0, 0x6585,
    0, 0, 0x4e91, 0, 0x6586, 0, 0, 0x6587, 0, 0, 0, 0, 0, 0, 0x6588, 0x501e,
    0xac25, 0x56b7, 0, 0x6589, 0, 0, 0x5504, 0x53a6, 0x658a, 0xac26, 0x658b, 0x4c0b, 0, 0, 0, 0x4a8c,
    0xac27, 0, 0, 0x658c, 0x6dd8, 0, 0x4dcb, 0x53a1, 0x658d, 0, 0x49b0, 0, 0, 0, 0, 0xac28,
    0, 0x658e, 0, 0, 0, 0, 0x6590, 0x56d7, 0, 0x658f, 0x4fa6, 0, 0x6591, 0, 0, 0x6592,
    0xac29, 0, 0x6593, 0x4a31, 0, 0, 0, 0xac2a, 0, 0, 0x6594, 0, 0, 0x6595, 0, 0x6596,
    0x6597, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x49b1, 0, 0x6dda, 0, 0xac2b, 0, 0xac2c, 0, 0x6598, 0, 0x6599, 0x659a, 0, 0,
    0, 0, 0, 0x4952, 0, 0x6ddb, 0x4f88, 0x659b, 0, 0, 0, 0xac2d, 0, 0, 0, 0,
    0, 0xac2f, 0, 0xac30, 0x659c, 0, 0x6ddc, 0, 0x659d, 0, 0, 0, 0, 0xac31, 0, 0xac32,
    0x4c20, 0, 0x525b, 0x659e, 0, 0, 0, 0, 0x4bb7, 0, 0x4fb6, 0, 0x65a1, 0, 0x5304, 0,
    0x65a0, 0xac34, 0x6ddd, 0x4b91, 0xac35, 0x6dde, 0x659f, 0x5157, 0x4a8d, 0, 0, 0x65a2, 0, 0x65a3, 0, 0x4f39,
    0, 0xac37, 0x6e01, 0x4bcd, 0, 0x65a4, 0, 0, 0, 0, 0x558c, 0, 0, 0x503f, 0, 0,
    0, 0x4ad6, 0, 0x5655, 0x50aa, 0xac38, 0x65a5, 0x6e02, 0, 0, 0x4fa7, 0x51d0, 0x4f3a, 0, 0xac39, 0,
    0, 0x65a6, 0, 0, 0, 0xac3a, 0x65a9, 0x6e03, 0x65aa, 0, 0, 0, 0, 0xac3b, 0x6e04, 0,
    0x4d1e, 0x5122, 0x65a8, 0, 0x4f3b, 0x549e, 0, 0, 0xac3c, 0, 0, 0x65a7, 0, 0x6e05, 0x4dcc, 0,
    0x48b3, 0x6e06, 0x65ae, 0x4bb8, 0, 0, 0x4dce, 0, 0, 0x4dcd, 0, 0x57ad, 0x65ad, 0x65ac, 0x5087, 0,
    0x4aad, 0x57a3, 0x499a, 0x4f3c, 0, 0x6e07, 0, 0, 0, 0x6e08, 0, 0, 0x65ab, 0, 0, 0,
    0, 0, 0x65b0, 0, 0x65b1, 0x65af, 0, 0x4c38, 0, 0x56a0, 0, 0, 0x4dcf, 0x5387, 0, 0,
    0xac3e, 0x65b4, 0, 0x5020, 0, 0x51a2, 0, 0, 0x5696, 0, 0x65b7, 0, 0, 0, 0x4c4c, 0,
    0x501f, 0x65b3, 0, 0x65b8, 0x4c4d, 0x65b5, 0x65b6, 0x6e09, 0x65b2, 0, 0, 0, 0x5042, 0x5329, 0xac3d, 0,
    0x518f, 0, 0x493d, 0, 0, 0, 0, 0xac3f, 0, 0x5450, 0, 0, 0x4aa3, 0, 0xac40, 0x5214,
    0, 0, 0x65bb, 0, 0x65b9, 0, 0, 0x51ac, 0, 0, 0, 0x5021, 0x4a32, 0x65ba, 0, 0x4fbb,
    0x6e0a, 0, 0x572a, 0, 0, 0, 0x57a0, 0xac41, 0, 0, 0x65bc, 0x65c7, 0x5215, 0, 0x65c6, 0x6e0b,
    0x65c3, 0x65cb, 0x65c4, 0, 0x65c0, 0, 0x525c, 0x65bf, 0, 0, 0, 0x65bd, 0, 0x5681, 0x4dd0, 0,
    0, 0x65c1, 0, 0x65be, 0x6e0c, 0, 0x6e0d, 0x65c5, 0x4ed4, 0, 0x4c21, 0, 0xac42, 0, 0x515a, 0,
    0x55a5, 0x48ba, 0x4842, 0, 0x5305, 0xac45, 0, 0x65c9, 0, 0, 0xac44, 0, 0x65c8, 0xac46, 0x5346, 0,
    0x65cd, 0, 0, 0, 0x65c2, 0, 0x65cc, 0x65ce, 0, 0x4c0c, 0x65ca, 0x4cb6, 0xac47, 0x4e35, 0, 0xac48,
    0x65cf, 0x56b8, 0, 0, 0, 0, 0x65d2, 0, 0x65d5, 0, 0, 0x65d3, 0x5495, 0xac49, 0, 0,
    0, 0, 0, 0x65d0, 0, 0, 0, 0, 0, 0x4b40, 0, 0, 0, 0, 0x65d4, 0,
    0, 0x65d6, 0, 0xac4a, 0, 0, 0x6e11, 0, 0, 0x65da, 0, 0, 0x65d7, 0, 0x65d9, 0x65d8,
    0, 0xac4c, 0, 0, 0x6e12, 0, 0x65db, 0, 0x4e11, 0x6e13, 0x65dd, 0x65dc, 0x54c8, 0, 0xac4d, 0x6601,
    0, 0, 0, 0, 0, 0, 0x4bb9, 0, 0, 0x6e14, 0, 0x65de, 0x6602, 0, 0, 0x6603,
    0x4aa4, 0x6321, 0x4f59, 0, 0x6604, 0, 0xac4e, 0x4c4e, 0, 0, 0, 0, 0, 0x6605, 0, 0xac4f,
    0x6606, 0xac50, 0, 0x4d9e, 0, 0, 0, 0, 0, 0, 0x5d2e, 0xac51, 0x6607, 0, 0x6608, 0,
    0x4e92, 0, 0x6609, 0x660a, 0xac52, 0xac53, 0x660b, 0, 0, 0x660c, 0x660d, 0, 0xac54, 0x6e15, 0xac55, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0x518b, 0, 0xac56, 0x660e, 0, 0, 0xac58, 0, 0x6610,
    0, 0x660f, 0, 0, 0, 0xac5b, 0x5306, 0xac5c, 0x6611, 0x6e16, 0x558d, 0, 0x6612, 0, 0x6613, 0xac5d,
    0x6614, 0, 0, 0, 0xac5e, 0x6615, 0, 0xac81, 0, 0, 0x533a, 0, 0, 0, 0, 0,
    0, 0x4f3d, 0x6616, 0, 0, 0, 0, 0, 0x6e17, 0xac82, 0x4ccb, 0x580e, 0x6617, 0xac83, 0, 0,
    0, 0, 0, 0xac84, 0, 0, 0, 0, 0x6618, 0x549f, 0x6619, 0, 0x6621, 0, 0, 0,
    0, 0, 0x661a, 0, 0, 0x661c, 0, 0, 0, 0x661b, 0x661d, 0, 0x55a6, 0x661e, 0x661f, 0,
    0, 0, 0xac87, 0xac86, 0x6620, 0, 0, 0, 0x6622, 0xac88, 0, 0xac8a, 0, 0x498d, 0x5247, 0,
    0x54c9, 0x4d42, 0x4cb7, 0, 0xac8b, 0, 0, 0x54af, 0x493f, 0x542e, 0x6625, 0x4a33, 0x5035, 0x6624, 0x6629, 0x51d9,
    0x5643, 0, 0x6627, 0x6628, 0x4a8e, 0, 0x662a, 0x53c3, 0x513f, 0, 0, 0x5451, 0x529d, 0x6626, 0, 0x55a7,
    0x494c, 0x662c, 0x5788, 0x5222, 0x57a5, 0, 0, 0x4dd1, 0x662b, 0, 0x5111, 0, 0, 0x663c, 0x5088, 0,
    0, 0x5358, 0, 0x54b0, 0, 0xac8d, 0xac8c, 0, 0, 0xac8e, 0x662f, 0x4d9f, 0x4dd2, 0, 0x4f3e, 0,
    0x53c5, 0x6e19, 0x4c0d, 0x662e, 0x662d, 0, 0x54ca, 0, 0, 0, 0x4e21, 0, 0, 0x52b2, 0, 0,
    0xac90, 0xac91, 0, 0, 0x6e1a, 0, 0, 0, 0x6e1b, 0, 0x6631, 0x6632, 0x4cb8, 0x6630, 0x6e1c, 0,
    0, 0, 0, 0, 0x6633, 0x6634, 0, 0x6636, 0x5103, 0xac93, 0x6635, 0x4a46, 0, 0x6638, 0xac94, 0x6637,
    0x6639, 0, 0x6e1e, 0x663b, 0x663d, 0, 0x663e, 0, 0, 0, 0, 0x6e1f, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0x5036, 0, 0x4e2f, 0x663f, 0, 0, 0, 0x49b2, 0xac95, 0x6640, 0, 0,
    0x50d6, 0x6641, 0, 0x6642, 0x54cb, 0, 0, 0x4a8f, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0x6643, 0, 0, 0xac96, 0x5216, 0, 0, 0, 0, 0x48bb, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0xac97, 0, 0, 0, 0x6644, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0x4e51, 0, 0, 0xac98, 0, 0x4fd6, 0, 0, 0, 0, 0, 0, 0x6e20,
    0, 0, 0, 0x510d, 0, 0, 0, 0, 0, 0, 0x6647, 0, 0, 0, 0x6646, 0,
    0, 0, 0x6645, 0, 0, 0, 0xac9a, 0, 0xac9b, 0, 0, 0x664d, 0x664b, 0, 0x6e21, 0x6648,
    0, 0x6e22, 0, 0, 0, 0, 0x664a, 0x6e23, 0, 0xac9c, 0x6649, 0x664c, 0, 0x4ad7, 0, 0x6650,
    0, 0x5037, 0, 0x6651, 0, 0, 0, 0, 0x4c39, 0, 0x664e, 0x664f, 0xac9d, 0, 0, 0x5789,
    0, 0, 0, 0x5217, 0, 0x5089, 0, 0, 0, 0, 0, 0, 0x6652, 0xaca0, 0, 0x6655,
    0, 0, 0, 0, 0, 0, 0xaca1, 0, 0x6653, 0x6654, 0x56b9, 0, 0xac9e, 0, 0, 0x5307,
    0x6658, 0, 0, 0, 0xaca3, 0, 0xaca4, 0, 0, 0, 0, 0, 0, 0x6656, 0x6657, 0x6659,
    0x6e24, 0xaca5, 0xaca6, 0x6e25, 0, 0, 0, 0xaca7, 0, 0, 0x6689, 0, 0, 0, 0, 0,
    0x665c, 0, 0, 0, 0x665d, 0x665b, 0xacaa, 0, 0, 0xacab, 0, 0, 0, 0x6e26, 0, 0,
    0, 0, 0x665a, 0, 0x525d, 0, 0, 0x6681, 0x6685, 0x6682, 0x665e, 0xacac, 0x6683, 0, 0, 0,
    0x6684, 0, 0, 0, 0xacad, 0x668b, 0, 0, 0, 0x6686, 0, 0, 0, 0, 0, 0x5038,
    0x6688, 0, 0xacae, 0x668a, 0x6687, 0, 0, 0, 0, 0, 0, 0, 0xacaf, 0xacb0, 0, 0xacb1,
    0x6e27, 0, 0x668d, 0, 0x4e93, 0, 0x668c, 0, 0, 0, 0, 0x6e28, 0x668e, 0, 0, 0,
    0, 0x668f, 0, 0, 0x6692, 0x6691, 0, 0x6690, 0, 0, 0x6694, 0x6693, 0, 0x5656, 0, 0,
    0, 0x6696, 0, 0x6695, 0x6697, 0, 0, 0, 0xacb2, 0x6698, 0, 0, 0, 0, 0xacb3, 0,
    0, 0x669a, 0, 0, 0, 0, 0, 0, 0, 0, 0x6699, 0x4fa8, 0x669b, 0, 0xacb4, 0x4b4d,
    0x669c, 0x669e, 0, 0xacb5, 0, 0xacb6, 0xacb7, 0, 0, 0, 0, 0xacb8, 0, 0, 0x669f, 0,
    0x6e2a, 0, 0, 0, 0, 0x66a0, 0x669d, 0, 0x66a1, 0, 0x4e36, 0x66a2, 0x4a90, 0x4b93, 0, 0,
    0, 0xacba, 0x4c0e, 0, 0xacbb, 0, 0, 0, 0, 0, 0, 0x66a3, 0, 0, 0, 0x5350,
    0, 0, 0x529e, 0x66a4, 0, 0, 0, 0, 0, 0, 0, 0x66a7, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0x4e14, 0xacbd, 0x6e2c, 0x66a6, 0x66a5, 0x4bba, 0x66a8, 0,
    0xacbf, 0, 0, 0x49b3, 0, 0x66aa, 0, 0, 0xacc0, 0x4d3c, 0x66a9, 0, 0x66b2, 0, 0, 0,
    0, 0, 0x66ac, 0x66ae, 0x5545, 0x66ab, 0, 0xacc1, 0, 0x66ad, 0, 0x66b1, 0x66af, 0x4a91, 0x6e2d, 0x66b0,
    0, 0, 0, 0, 0, 0, 0x66b3, 0, 0, 0x53ba, 0x5738, 0xacc2, 0, 0x6e2e, 0, 0x4e94,
    0, 0, 0, 0x66b4, 0, 0, 0x6e2f, 0, 0x5682, 0x66b6, 0, 0x66b5, 0, 0, 0x66b9, 0x56a1,
    0xacc3, 0, 0x66b8, 0, 0x49cd, 0x66b7, 0x66bc, 0, 0, 0x66bb, 0xacc4, 0, 0x66ba, 0x5292, 0x66bd, 0,
    0, 0, 0, 0, 0x6e30, 0, 0, 0x66be, 0xacc5, 0, 0, 0, 0x66bf, 0, 0, 0x4ccc,
    0, 0x4b85, 0x66c0, 0x66c1, 0x66c2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x4fa9, 0x66c3, 0, 0x4e0d, 0x66c4,
    0, 0, 0, 0x66c5, 0xacc7, 0, 0x6e32, 0x5901, 0x58de, 0, 0, 0, 0, 0x66c6, 0x62d0, 0x66c7,
    0x5184, 0x4f8b, 0x53a0, 0, 0xacc8, 0x6e33, 0xacca, 0x66c8, 0, 0, 0x5535, 0x5234, 0x4cde, 0, 0, 0x5189,
    0, 0xaccc, 0x488a, 0, 0x55d8, 0x4fb7, 0xaccd, 0, 0, 0, 0xaccf, 0, 0, 0xacd0, 0x4bbe, 0,
    0, 0x4b41, 0, 0xacd1, 0x5536, 0xacd2, 0, 0, 0, 0, 0x66c9, 0, 0, 0, 0, 0,
    0xacd3, 0, 0x66cb, 0, 0x6e34, 0x66ca, 0x4940, 0, 0x6e35, 0x5356, 0x66cc, 0x53d7, 0, 0x5293, 0x6e36, 0x66cd,
    0x4eb2, 0xacd4, 0, 0, 0x66cf, 0xacd5, 0, 0x5622, 0x66de, 0x66d1, 0x66d2, 0xacd6, 0, 0x5229, 0, 0,
    0x5140, 0x50d7, 0xacd7, 0x5308, 0, 0x66d0, 0x4ab5, 0, 0x6e37, 0, 0, 0x66d9, 0xacd8, 0x66d6, 0x6705, 0x5309,
    0x51c0, 0x66d3, 0, 0x525e, 0x52b3, 0x66d4, 0x66d8, 0x4fc0, 0, 0x53c7, 0x522c, 0, 0, 0x5022, 0x66d7, 0x510e,
    0x5104, 0x66d5, 0x4809, 0x5782, 0, 0, 0, 0x66da, 0, 0, 0, 0, 0, 0x6e38, 0x5141, 0,
    0, 0x4e95, 0x4faa, 0, 0, 0x66dc, 0x66db, 0xacd9, 0x484f, 0x66dd, 0, 0, 0x548f, 0, 0x6707, 0,
    0, 0x533b, 0x4fcb, 0xacdb, 0xacdc, 0x51b9, 0, 0x4b58, 0, 0x6706, 0x5697, 0x489f, 0, 0x5537, 0x4941, 0x6701,
    0x6702, 0x6703, 0x6704, 0x531b, 0x5183, 0x4843, 0x6708, 0, 0x6709, 0x6a03, 0, 0, 0x511d, 0xacdd, 0x670a, 0,
    0x48d3, 0x50ac, 0, 0x4c0f, 0, 0x56ba, 0, 0, 0x670b, 0x528c, 0, 0, 0, 0x50d8, 0x4e37, 0x670c,
    0, 0, 0x670f, 0, 0, 0x4ec5, 0x670d, 0x508b, 0x508a, 0, 0x4844, 0, 0x572b, 0x6711, 0, 0x5452,
    0x6713, 0x6712, 0x6710, 0x61c4, 0x4a34, 0xad02, 0, 0x66ce, 0x6e3a, 0x6715, 0x6714, 0, 0xad03, 0, 0, 0x6716,
    0xad04, 0x5698, 0, 0, 0, 0x6e3b, 0, 0x6e3c, 0, 0x6e3d, 0, 0x6e3e, 0, 0, 0, 0,
    0, 0xad06, 0x6e3f, 0x5341, 0, 0, 0x558e, 0, 0x6717, 0, 0x4e39, 0, 0, 0, 0, 0x6718,
    0xad08, 0x6719, 0, 0x6e40, 0, 0x671a, 0xad09, 0, 0x5281, 0, 0, 0, 0, 0, 0x6e41, 0,
    0, 0x484a, 0, 0xad0a, 0x6e42, 0x6e43, 0, 0x6e44, 0xad0b, 0, 0x4cb9, 0, 0, 0, 0x579a, 0,
    0, 0, 0, 0, 0, 0, 0, 0x6e45, 0, 0, 0, 0x671e, 0xad0d, 0x6e46, 0x6e47, 0xad0e,
    0, 0x4b94, 0x671b, 0, 0x671c, 0, 0, 0, 0x54d4, 0, 0, 0xad13, 0, 0x49b4, 0, 0x6e48,
    0, 0, 0xad11, 0, 0x6e49, 0x5699, 0xad10, 0x4b1f, 0, 0, 0, 0, 0, 0x52b4, 0xad14, 0xad15,
    0xad12, 0, 0x671f, 0, 0xad16, 0, 0xad17, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x6720, 0, 0x6e4b, 0x6e4c, 0x6e4d, 0, 0xad18, 0x6721, 0, 0, 0xad19, 0, 0xad1a, 0,
    0, 0, 0x6e4e, 0x6e4f, 0, 0, 0, 0x6e50, 0, 0, 0, 0, 0, 0x5282, 0, 0x6e51,
    0x6723, 0x6e52, 0x6722, 0, 0x6e53, 0, 0, 0xad1b, 0, 0xad1c, 0xad1d, 0, 0, 0x6e54, 0, 0,
    0, 0, 0, 0, 0, 0, 0xad1e, 0xad1f, 0x6e55, 0x5333, 0x6724, 0x4e96, 0x4e40, 0x53bb, 0x51d1, 0,
    0, 0, 0x4e52, 0, 0x4fcc, 0, 0x6725, 0xad20, 0x6726, 0xad21, 0, 0x6e56, 0, 0, 0, 0,
    0, 0xad22, 0x4fbd, 0x6727, 0xad23, 0x6728, 0, 0, 0, 0x6729, 0x56cf, 0, 0x4e97, 0, 0, 0,
    0, 0, 0x672b, 0x672a, 0xad24, 0x4cba, 0, 0x4cd3, 0x4da0, 0xad25, 0, 0, 0, 0, 0, 0,
    0, 0, 0x672e, 0x6e57, 0, 0xad26, 0, 0x4ec6, 0, 0x672d, 0, 0x672c, 0, 0x5149, 0xad27, 0,
    0x4c4f, 0, 0x5023, 0, 0, 0, 0, 0x5410, 0, 0, 0, 0, 0x4e99, 0, 0x6e58, 0,
    0, 0, 0x672f, 0, 0x4f3f, 0, 0, 0, 0xad28, 0, 0x6732, 0x6730, 0x6e59, 0, 0xad29, 0x6731,
    0, 0x6e5a, 0, 0xad2a, 0x6734, 0x6733, 0xad2b, 0, 0x4f5a, 0, 0x6735, 0, 0x6e5b, 0, 0, 0,
    0x6736, 0x6737, 0, 0xad2c, 0xad2d, 0, 0x5430, 0x4d33, 0x4e41, 0x6738, 0, 0x6739, 0x5704, 0x4ea5, 0x564e, 0x572c,
    0x673a, 0x4b42, 0, 0, 0, 0, 0x673b, 0x6e5c, 0x5283, 0, 0xad2e, 0x673e, 0x49d8, 0x4fab, 0, 0x673c,
    0, 0x673d, 0, 0x5240, 0x6e5e, 0x6e81, 0x55b5, 0x4b5c, 0, 0, 0, 0, 0xad31, 0x6e82, 0xad32, 0,
    0, 0x6e83, 0, 0, 0, 0x6740, 0x6741, 0, 0, 0, 0, 0x6e5d, 0x673f, 0, 0, 0x6743,
    0, 0xad33, 0, 0, 0, 0, 0, 0x6e84, 0, 0, 0xad34, 0, 0, 0x533f, 0x49a3, 0,
    0x6e85, 0x6747, 0, 0, 0x6744, 0x6746, 0xad35, 0xad36, 0, 0, 0, 0, 0, 0, 0x6742, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0x67af, 0, 0, 0x6745, 0, 0, 0,
    0, 0, 0, 0xad38, 0x574b, 0, 0, 0x4c3a, 0x6e86, 0x6e87, 0x6e88, 0, 0x6e89, 0, 0, 0x674f,
    0x6e8a, 0, 0xad39, 0x6e8b, 0x5294, 0x674a, 0, 0xad3a, 0x674d, 0x674b, 0xad3b, 0x6750, 0, 0, 0xad3c, 0x6e8c,
    0x6751, 0xad3d, 0, 0, 0, 0, 0xad3e, 0x6749, 0, 0xad3f, 0x6756, 0x48d4, 0, 0, 0x6748, 0,
    0xad40, 0xad41, 0x540d, 0, 0x674c, 0xad42, 0x4f40, 0xad43, 0xad44, 0, 0, 0, 0, 0, 0, 0,
    0, 0x4cbb, 0, 0, 0, 0, 0, 0, 0x6e8d, 0, 0, 0, 0xad47, 0xad48, 0x55a8, 0xad49,
    0x4b44, 0, 0, 0x4ea6, 0, 0x531c, 0, 0, 0x6e8e, 0xad4a, 0, 0, 0, 0xad4b, 0, 0,
    0, 0x508d, 0, 0x6754, 0, 0x674e, 0x6753, 0xad4c, 0x5623, 0xad4d, 0x5218, 0x6755, 0x6752, 0, 0, 0xad4e,
    0, 0, 0, 0, 0, 0, 0, 0xad4f, 0, 0, 0, 0xad50, 0, 0x508c, 0, 0,
    0, 0, 0xad53, 0, 0, 0, 0, 0x6759, 0, 0x6758, 0, 0, 0, 0, 0, 0xad54,
    0xad55, 0, 0x6e8f, 0, 0, 0, 0xad56, 0, 0, 0, 0, 0x6e90, 0x6e91, 0, 0xad57, 0x6757,
    0xad58, 0, 0x558f, 0x6e92, 0, 0, 0, 0xad59, 0, 0xad5a, 0, 0, 0, 0, 0, 0,
    0x6e93, 0, 0, 0, 0x4edb, 0xad5b, 0, 0xad5c, 0, 0x675a, 0x553f, 0, 0, 0x48b4, 0, 0,
    0, 0, 0x54a6, 0x51d2, 0, 0, 0, 0xad82, 0x4ad8, 0xad83, 0x675c, 0xad84, 0x4cbd, 0, 0, 0x6e94,
    0, 0, 0xad85, 0, 0x6e95, 0, 0x4d8c, 0, 0, 0, 0, 0, 0, 0xad86, 0, 0x675b,
    0x4fcd, 0xad5d, 0, 0, 0, 0xad87, 0, 0, 0x4fce, 0x6781, 0x6783, 0, 0, 0xad88, 0xad89, 0x6e96,
    0x4f5b, 0x6e97, 0x6782, 0x6784, 0, 0x6e98, 0x4b33, 0xad8a, 0x54a5, 0xad8b, 0, 0x4e42, 0x5783, 0, 0x675e, 0x4d58,
    0, 0, 0x579f, 0, 0, 0x6786, 0, 0, 0, 0, 0x6785, 0x6787, 0, 0, 0, 0,
    0, 0, 0, 0, 0x675d, 0, 0, 0xad8e, 0x6e99, 0x6e9a, 0x6e9b, 0x5349, 0, 0x52b5, 0, 0,
    0, 0xad8f, 0, 0, 0x5237, 0, 0x678c, 0xad90, 0, 0, 0xad91, 0x51a3, 0x6788, 0, 0, 0,
    0x6789, 0, 0, 0, 0x6e9c, 0x6e9d, 0, 0, 0, 0, 0x6e9e, 0xad92, 0x4b8d, 0, 0x678b, 0,
    0x6e9f, 0xad93, 0, 0xad94, 0, 0x4c10, 0, 0, 0, 0, 0, 0, 0x678a, 0, 0x4f41, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0xad98, 0, 0, 0xad99, 0x49d9, 0, 0, 0xad9a,
    0, 0, 0, 0, 0x6790, 0, 0x4d1f, 0x50d9, 0, 0, 0x522a, 0x6ea0, 0, 0, 0xad9b, 0,
    0, 0xad95, 0, 0x6ea1, 0, 0, 0, 0x499b, 0, 0, 0, 0, 0x678e, 0x678f, 0x5223, 0,
    0x678d, 0, 0, 0, 0, 0, 0, 0, 0, 0x6791, 0x6ea2, 0, 0, 0, 0, 0,
    0, 0xada0, 0, 0x6797, 0, 0, 0x6ea3, 0xada1, 0x679a, 0, 0, 0, 0, 0, 0, 0,
    0x6799, 0x528d, 0, 0, 0, 0, 0x6792, 0x6793, 0x6796, 0, 0, 0, 0xada2, 0x6798, 0x6ea4, 0x6ea5,
    0, 0x4b20, 0xada3, 0, 0x679b, 0x6795, 0, 0xada4, 0x6794, 0, 0, 0, 0, 0, 0, 0,
    0, 0xad9f, 0, 0, 0, 0xad9c, 0, 0, 0, 0, 0, 0xada9, 0, 0x6ea7, 0, 0,
    0, 0, 0, 0x679f, 0x6ea6, 0, 0, 0x67a0, 0, 0xada5, 0, 0, 0, 0, 0, 0xada6,
    0x67a1, 0, 0, 0x679e, 0x679d, 0, 0xada7, 0xada8, 0x4f42, 0x530a, 0x679c, 0, 0, 0, 0, 0,
    0, 0x67a5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x67a3, 0, 0, 0, 0,
    0, 0, 0xadaa, 0x6ea8, 0xadab, 0x67a4, 0x67a2, 0, 0x5158, 0, 0x67a6, 0xadac, 0, 0, 0, 0,
    0, 0x67a7, 0, 0, 0x67a9, 0xadad, 0, 0, 0, 0, 0x6ea9, 0, 0, 0, 0, 0,
    0, 0x4a35, 0x67a8, 0x565a, 0, 0, 0, 0, 0, 0, 0x67b4, 0x67aa, 0, 0, 0x67ad, 0,
    0x67ab, 0, 0x67ac, 0x6eaa, 0, 0, 0, 0, 0, 0, 0x67ae, 0x6eab, 0, 0xadb0, 0, 0xadb1,
    0x67b0, 0x6eac, 0x6ead, 0, 0, 0x67b1, 0, 0x67b2, 0, 0, 0, 0, 0x67b5, 0x67b3, 0x67b6, 0x67b8,
    0, 0x67b7, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0x5219, 0xadb2, 0xadb3, 0, 0, 0, 0, 0, 0,
    0x5647, 0, 0x67b9, 0x508e, 0, 0, 0xadb4, 0x67ba, 0, 0x5524, 0x67bb, 0x498b, 0xadb5, 0xadb6, 0x6eae, 0x489c,
    0, 0x4a37, 0, 0x4a36, 0x67bc, 0, 0x67bd, 0, 0x67be, 0x67bf, 0, 0, 0, 0, 0, 0x6eaf,
    0x67c0, 0, 0x4a38, 0x49b5, 0x4cbe, 0x5416, 0x6eb0, 0x67c2, 0x67c1, 0x6eb1, 0, 0xadb8, 0x6eb2, 0x67c3, 0, 0,
    0, 0, 0x48bc, 0, 0xadb9, 0, 0x6eb3, 0, 0, 0x67c6, 0, 0x67c5, 0x67c4, 0x6eb4, 0x67c7, 0,
    0, 0, 0, 0x67ca, 0, 0, 0, 0x4827, 0xadbb, 0, 0x67c8, 0x6eb5, 0x67cc, 0x67cb, 0, 0,
    0x6eb6, 0, 0, 0x6eb7, 0x67ce, 0x67cd, 0x67cf, 0, 0x530e, 0, 0x6eb9, 0, 0x67d0, 0, 0x6eba, 0,
    0, 0x67d1, 0x67d3, 0, 0, 0x67d2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x54cc, 0xad05, 0, 0,
    0, 0x67d4, 0, 0, 0, 0, 0, 0, 0x67d5, 0, 0x4d45, 0, 0xadbe, 0, 0x67d6, 0x67d7,
    0, 0, 0x55a9, 0xadbf, 0xadc0, 0, 0, 0, 0, 0, 0, 0x50ab, 0xadc2, 0, 0, 0x4804,
    0x512b, 0xadc3, 0x67d8, 0, 0x54cd, 0, 0, 0, 0, 0, 0, 0x67db, 0x67d9, 0x4cbf, 0, 0x67da,
    0x4c22, 0, 0, 0, 0, 0, 0, 0, 0x6ebb, 0, 0, 0x5525, 0x67dd, 0x6801, 0x67de, 0x6802,
    0, 0xadc4, 0x4881, 0x4fb8, 0x4edc, 0x4a39, 0x6803, 0, 0, 0, 0x53c6, 0, 0x6805, 0, 0, 0,
    0x4882, 0, 0x6804, 0x5224, 0, 0x572d, 0x530b, 0x67dc, 0x5706, 0, 0x4c11, 0, 0, 0x56bb, 0, 0,
    0, 0, 0xadc6, 0, 0x6ebc, 0x4b59, 0x5714, 0, 0x4b88, 0, 0x5142, 0x6381, 0, 0x6806, 0x498c, 0x4fcf,
    0, 0, 0, 0, 0x49b6, 0x6808, 0, 0x6809, 0x6807, 0x4bc4, 0xadc8, 0x4d3d, 0x4f43, 0x6ebe, 0, 0,
    0x4883, 0, 0, 0x5739, 0x6ebf, 0x6ec0, 0, 0x680b, 0x670e, 0xadcb, 0x680a, 0, 0, 0, 0, 0xadcc,
    0x680e, 0x680c, 0x680d, 0xadcd, 0x680f, 0, 0x6810, 0x574c, 0x6811, 0x6812, 0xadce, 0x5029, 0x541b, 0xadcf, 0, 0,
    0x4fdd, 0x4a47, 0, 0, 0x569a, 0x494d, 0x4e98, 0x4c3b, 0, 0x6815, 0, 0x6814, 0x4dd3, 0x6816, 0x6813, 0,
    0, 0x4d88, 0x6ec1, 0, 0, 0x681a, 0x650d, 0, 0xadd2, 0x5936, 0xadd3, 0x4fd7, 0x6818, 0xadd4, 0x6ec2, 0,
    0, 0, 0x5705, 0x5351, 0, 0, 0, 0, 0x488b, 0x6ec4, 0x5043, 0x4e16, 0, 0, 0, 0x6ec5,
    0x5517, 0, 0x48a0, 0, 0, 0, 0x574d, 0x56cb, 0, 0x681b, 0, 0x52a5, 0, 0, 0, 0,
    0x4e5b, 0, 0, 0, 0x681c, 0, 0x681d, 0x4fac, 0x681e, 0, 0x574e, 0, 0, 0x6819, 0x6820, 0x6822,
    0, 0x6821, 0, 0x681f, 0xadd6, 0, 0x6823, 0, 0, 0x6824, 0, 0, 0x50da, 0, 0x4942, 0,
    0, 0, 0, 0xadd7, 0x6825, 0, 0, 0x5618, 0, 0, 0x6826, 0, 0, 0, 0, 0,
    0x6827, 0, 0x578a, 0x6ec6, 0, 0, 0xadd9, 0, 0x5d91, 0x6828, 0, 0x6ec7, 0, 0x6829, 0x682a, 0,
    0, 0xadda, 0x682e, 0, 0x682b, 0, 0x682c, 0xaddb, 0x682d, 0x682f, 0, 0, 0, 0x6ec8, 0x6ec9, 0x6eca,
    0, 0, 0x5024, 0, 0, 0xaddc, 0x5657, 0xaddd, 0, 0x5025, 0x6ecb, 0xadde, 0x6830, 0, 0x5453, 0,
    0x6831, 0x69b3, 0x562c, 0, 0x6832, 0, 0x6833, 0, 0x6834, 0x49b7, 0xae01, 0x6836, 0, 0x4fb9, 0x6ecc, 0,
    0, 0x6837, 0, 0x6ecd, 0x4b84, 0, 0, 0, 0, 0x6838, 0x683c, 0, 0x683a, 0, 0, 0,
    0, 0x683b, 0, 0, 0x49d3, 0x6839, 0x683d, 0, 0, 0, 0, 0x683e, 0, 0x4828, 0, 0x683f,
    0x6840, 0, 0, 0, 0, 0x6ece, 0xae04, 0, 0x4f44, 0, 0xae05, 0, 0x6841, 0, 0xae06, 0,
    0x4aa7, 0, 0xae07, 0x6844, 0, 0, 0x6843, 0, 0x6842, 0, 0, 0x65d1, 0, 0x553c, 0x6ecf, 0,
    0, 0xae08, 0xae09, 0x6845, 0x6846, 0, 0, 0, 0, 0, 0x6ed0, 0, 0, 0, 0xae0a, 0,
    0, 0x6ed1, 0, 0x6847, 0, 0, 0x6848, 0, 0x6849, 0x6ed2, 0, 0x684a, 0xae0b, 0, 0, 0,
    0, 0xae0c, 0, 0x4a3a, 0xae0d, 0, 0, 0, 0xae0e, 0xae0f, 0, 0x6ed4, 0x684b, 0, 0x6ed3, 0,
    0, 0xae10, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x684c, 0x5383, 0,
    0, 0xae11, 0x684e, 0x491b, 0x6ed5, 0x6851, 0x6850, 0, 0, 0, 0, 0x4884, 0, 0, 0, 0x4b21,
    0, 0x5527, 0x521a, 0x4d02, 0xae12, 0x4cc0, 0x4ec7, 0, 0x4fbc, 0, 0x6ed7, 0, 0x6853, 0xae13, 0xae14, 0x6852,
    0x56a2, 0x4a48, 0x5432, 0x533c, 0xae15, 0, 0xae16, 0x4fdc, 0x572e, 0, 0x4bbb, 0, 0, 0, 0x6ed8, 0,
    0, 0x6856, 0, 0xae19, 0x6855, 0xae1c, 0, 0, 0, 0, 0, 0x6ed9, 0x55ab, 0x530c, 0, 0,
    0x6eda, 0, 0xae1a, 0xae1b, 0x48b0, 0, 0, 0x6857, 0x6854, 0, 0, 0x54b1, 0x56ca, 0x6858, 0, 0,
    0, 0, 0, 0, 0, 0, 0x6859, 0xae1d, 0, 0, 0, 0x685b, 0x514a, 0x49bb, 0x49bc, 0x685a,
    0, 0, 0x6edc, 0x6edd, 0x4a49, 0x4c12, 0x6ede, 0x6f01, 0x4a4a, 0x6f02, 0x6f03, 0x529f, 0, 0, 0x5740, 0,
    0, 0, 0, 0, 0, 0x6f05, 0xae1e, 0x4c3c, 0, 0, 0, 0x685c, 0x6f06, 0, 0, 0x685d,
    0x685e, 0x6881, 0, 0x6883, 0x6882, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0x54d7, 0, 0x6884, 0xae1f, 0, 0xae20, 0, 0x6885,
    0xae21, 0x6886, 0, 0, 0, 0, 0x6887, 0xae23, 0xae24, 0, 0x6f07, 0xae25, 0xae26, 0, 0, 0xae27,
    0, 0, 0xae28, 0x6889, 0x6888, 0, 0x688a, 0xae29, 0x6f08, 0, 0, 0xae2a, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x5454, 0x632c, 0, 0, 0x4f89,
    0xae2b, 0xae2d, 0x4a92, 0xae2e, 0, 0xae2f, 0, 0x6f09, 0, 0x688b, 0xae30, 0x688c, 0, 0x590c, 0x5e9b, 0x5433,
    0xae31, 0xae32, 0x485b, 0xae33, 0x481b, 0, 0, 0, 0, 0, 0, 0, 0x4dd4, 0x5590, 0x4f5e, 0,
    0, 0, 0, 0x688d, 0, 0x563f, 0, 0, 0xae34, 0x688e, 0x56bc, 0, 0x48a2, 0, 0, 0,
    0x4da1, 0, 0x688f, 0x494e, 0x6890, 0, 0xae37, 0xae38, 0x6891, 0, 0xae3a, 0xae3b, 0xae3c, 0x6893, 0x6894, 0,
    0x6896, 0x6892, 0, 0, 0x6895, 0, 0, 0, 0x4a3b, 0, 0, 0, 0x6897, 0, 0x6898, 0,
    0, 0xae3e, 0xae3f, 0xae40, 0, 0, 0, 0, 0, 0, 0xae41, 0xae42, 0xae43, 0x6899, 0x689a, 0,
    0xae44, 0xae45, 0x689b, 0, 0, 0x689d, 0xae46, 0, 0, 0x689c, 0, 0x689f, 0x68a2, 0xae47, 0xae48, 0,
    0x689e, 0x68a0, 0x68a1, 0, 0, 0x68a3, 0, 0x4b22, 0x6f0a, 0, 0, 0, 0xae49, 0, 0, 0xae4a,
    0xae4b, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0x4e53, 0x68a4, 0x68a5, 0x4cc1, 0, 0, 0, 0, 0x6f0b, 0,
    0, 0, 0, 0xae4c, 0, 0x68a6, 0xae4d, 0, 0x499e, 0, 0, 0, 0x53af, 0x68a7, 0x68a8, 0,
    0, 0, 0, 0x51ba, 0x534b, 0, 0, 0, 0, 0xae4e, 0, 0, 0x68a9, 0xae4f, 0, 0xae50,
    0, 0x53dd, 0, 0xae51, 0x512c, 0x48b8, 0x4b4e, 0, 0x4b4f, 0xae52, 0, 0, 0, 0, 0, 0,
    0x51d3, 0x68ae, 0x4b50, 0, 0xae53, 0x494f, 0, 0, 0x68ad, 0xae54, 0, 0x68ab, 0, 0x68ac, 0xae55, 0x68aa,
    0, 0, 0x68b8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x68af, 0x68b0, 0,
    0xae57, 0x68b1, 0x68b2, 0, 0, 0, 0, 0, 0x68b4, 0xae58, 0, 0x68b3, 0xae59, 0, 0, 0x4eb9,
    0, 0x68b5, 0x6f0c, 0x6f0d, 0, 0x68b7, 0, 0, 0, 0, 0xae5a, 0, 0, 0, 0x4a93, 0x68b6,
    0, 0xae5b, 0x50db, 0x4c13, 0, 0, 0xae5c, 0, 0, 0x68b9, 0xae5d, 0, 0, 0, 0, 0,
    0xae5e, 0, 0, 0, 0x6f0e, 0, 0, 0, 0x512d, 0, 0, 0x68ba, 0, 0x6f0f, 0x6f10, 0,
    0x530d, 0xae81, 0, 0, 0, 0, 0xae82, 0x68bb, 0x6f11, 0, 0, 0, 0, 0, 0x68c0, 0,
    0x68be, 0, 0x68bd, 0x68bf, 0xae83, 0x68bc, 0, 0, 0, 0, 0x6f12, 0, 0xae84, 0x68c2, 0x6f13, 0,
    0, 0, 0x6f14, 0, 0, 0x68c1, 0, 0x68c4, 0xae85, 0, 0x4b23, 0x68c3, 0, 0, 0, 0x68c5,
    0, 0, 0x68c6, 0, 0x68c8, 0x68c7, 0, 0, 0, 0x68c9, 0x68cb, 0x68ca, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0x4cdc, 0, 0, 0, 0, 0x68cc, 0, 0xae87,
    0x68cd, 0, 0, 0, 0, 0, 0x6f15, 0xae89, 0x499c, 0xae8b, 0, 0, 0x68ce, 0, 0, 0,
    0x68cf, 0x6f16, 0, 0x6f17, 0x4fd1, 0, 0xae8d, 0, 0, 0, 0, 0, 0, 0, 0x6f18, 0x68d0,
    0xae8e, 0x68d1, 0xae8f, 0x68d2, 0x68d3, 0xae90, 0x6f19, 0, 0x4cc2, 0, 0, 0, 0xae92, 0, 0x68d4, 0x68d5,
    0xae93, 0, 0x68d6, 0x68d7, 0, 0xae94, 0x68d8, 0, 0, 0xae95, 0x5411, 0x68da, 0, 0x5486, 0x68db, 0x68d9,
    0, 0x68dd, 0, 0, 0x68dc, 0, 0, 0x68de, 0, 0x6f1a, 0, 0x6901, 0, 0, 0, 0,
    0, 0, 0x6f1b, 0xae96, 0, 0, 0x6902, 0, 0x6f1c, 0, 0, 0, 0xae97, 0, 0, 0,
    0xae98, 0, 0xae99, 0, 0, 0, 0xae9a, 0, 0x6903, 0, 0x6904, 0, 0xae9b, 0, 0, 0x6905,
    0x6f1d, 0, 0x6906, 0x6907, 0, 0x6908, 0, 0x6909, 0x690a, 0x690b, 0x690c, 0xae9c, 0, 0x6f1f, 0x690d, 0x690e,
    0, 0x5e95, 0x690f, 0xae9d, 0, 0, 0, 0, 0, 0, 0, 0x6258, 0x4a94, 0xae9e, 0, 0,
    0, 0x4981, 0x4d12, 0x6911, 0x6910, 0x5605, 0, 0, 0, 0, 0, 0xaea0, 0, 0x6913, 0x6914, 0x6912,
    0, 0x6915, 0, 0, 0x55c2, 0, 0, 0, 0x6916, 0, 0x4adb, 0, 0, 0, 0x6f20, 0,
    0, 0, 0, 0xaea1, 0, 0xaea2, 0x6f22, 0, 0, 0, 0, 0xaea3, 0xaea4, 0, 0, 0x5785,
    0, 0, 0x6f23, 0xaea5, 0x6917, 0x6f24, 0xaea6, 0xaea7, 0, 0x6f21, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0x6919, 0x6f25, 0, 0, 0, 0, 0, 0x6f26, 0, 0, 0, 0x481e, 0x6f27,
    0, 0x691a, 0x550b, 0x6918, 0, 0, 0x691b, 0x691c, 0, 0, 0, 0, 0, 0, 0x6f28, 0x691d,
    0x691e, 0, 0, 0, 0, 0, 0xaea8, 0x6f29, 0x691f, 0, 0x55ce, 0x4d8d, 0xaea9, 0x4d5a, 0x508f, 0,
    0, 0xaeaa, 0xaead, 0, 0x6920, 0, 0, 0, 0xaeae, 0x6923, 0, 0, 0, 0, 0xaeaf, 0,
    0x6921, 0x6f2a, 0, 0, 0, 0, 0x6924, 0xaeb0, 0, 0x4c51, 0x6922, 0, 0, 0, 0x6f2b, 0x6925,
    0, 0x6926, 0x6927, 0, 0x692b, 0, 0x4d8a, 0, 0xaeb2, 0, 0, 0x5144, 0, 0xaeb3, 0, 0,
    0, 0x692c, 0x6929, 0x6928, 0x692a, 0x6f2c, 0, 0xaeb4, 0x4bbf, 0, 0xaeb5, 0xaeb6, 0, 0, 0xaeb8, 0xaeb7,
    0x6930, 0x692f, 0x692e, 0xaeb1, 0, 0x4813, 0, 0xaebc, 0x6f2d, 0, 0xaeba, 0, 0, 0x6f2e, 0, 0,
    0x6f2f, 0, 0, 0, 0x693a, 0, 0x6936, 0, 0x6937, 0x6933, 0x6939, 0, 0x6935, 0x49c2, 0, 0,
    0x57ac, 0, 0x6938, 0x6934, 0x6932, 0x6931, 0xaebe, 0, 0xaebf, 0xaec0, 0xaec1, 0x693c, 0, 0xaec2, 0, 0,
    0, 0x693f, 0xaec3, 0x6f30, 0x693e, 0x693d, 0, 0xaec4, 0, 0xaec5, 0xaec6, 0, 0, 0x54a9, 0x693b, 0x4853,
    0x6940, 0xaec8, 0x6942, 0, 0, 0, 0xaec9, 0xaeca, 0, 0x49cf, 0x692d, 0x4897, 0, 0, 0x6944, 0,
    0, 0x6f31, 0, 0, 0, 0xaecb, 0x6943, 0x6941, 0x518d, 0xaece, 0xaecf, 0, 0, 0, 0, 0x6f32,
    0x6f33, 0, 0x55d0, 0x6f34, 0xaed1, 0, 0, 0x573a, 0xaed2, 0, 0x6945, 0xaed3, 0xaecc, 0xaed4, 0, 0xaed5,
    0x6946, 0, 0, 0x6f35, 0, 0x6f36, 0, 0x6947, 0, 0xaed6, 0xaed7, 0xaed8, 0, 0xaed9, 0xaeda, 0,
    0xaedb, 0, 0xaedc, 0, 0, 0xaedd, 0x6948, 0x6f37, 0x6949, 0, 0xaede, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0x521b, 0xaf01, 0x694a, 0, 0x5417, 0, 0x694f, 0x694b, 0, 0, 0,
    0x694c, 0, 0xaf02, 0x5591, 0x5624, 0, 0x5330, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0xaf04, 0x6950, 0, 0, 0x6951, 0x531e, 0x694e, 0x694d, 0, 0xaf03, 0, 0, 0x490a, 0,
    0, 0xaf06, 0x6959, 0, 0, 0x6958, 0, 0xaf07, 0xaf08, 0, 0, 0x48d5, 0, 0x6f38, 0x6f39, 0x6956,
    0, 0, 0, 0x6955, 0, 0, 0x6953, 0, 0x49db, 0, 0x6952, 0x4e12, 0x4909, 0, 0, 0,
    0, 0, 0xaf0c, 0, 0, 0, 0, 0, 0, 0, 0, 0x4cc3, 0, 0, 0x695c, 0x695b,
    0, 0x695a, 0xaf0e, 0x6f3a, 0x6957, 0, 0x695d, 0x6f3b, 0x695e, 0, 0xaf0f, 0, 0, 0, 0, 0,
    0x6985, 0x6984, 0x6f3c, 0, 0, 0, 0, 0, 0, 0x6986, 0, 0, 0x488d, 0x6981, 0x6982, 0xaf10,
    0x4cd4, 0x5619, 0xaf11, 0x6f3d, 0x6983, 0, 0, 0, 0, 0xaf13, 0, 0xaf14, 0x5592, 0, 0, 0x698b,
    0x6f3e, 0, 0x6987, 0xaf16, 0, 0, 0xaf17, 0xaf18, 0, 0, 0x698c, 0, 0x6f3f, 0, 0xaf19, 0,
    0, 0, 0, 0, 0xaf1a, 0, 0, 0x6989, 0, 0x6988, 0x6f40, 0, 0, 0xaf1b, 0, 0x4bbc,
    0, 0, 0, 0, 0, 0, 0x6f41, 0, 0, 0xaf1c, 0x698d, 0, 0, 0, 0, 0,
    0, 0xaf1d, 0, 0, 0x698e, 0, 0, 0, 0, 0x698f, 0, 0x698a, 0x6f43, 0, 0, 0x6954,
    0, 0, 0x6990, 0, 0x5241, 0xaf1f, 0, 0, 0x6994, 0xaf20, 0x6995, 0x6993, 0x6f44, 0xaf21, 0, 0xaf1e,
    0x6f42, 0x6992, 0x6998, 0xaf22, 0x6991, 0, 0x6996, 0xaf23, 0, 0xaf24, 0, 0, 0, 0, 0, 0x6997,
    0, 0, 0, 0x699a, 0, 0, 0xaf25, 0x6f45, 0, 0x6999, 0xaf26, 0, 0, 0, 0, 0xaf27,
    0xaf28, 0, 0, 0xaf29, 0, 0, 0x699c, 0x6f47, 0, 0, 0, 0, 0, 0x699d, 0, 0x699e,
    0, 0, 0x57a9, 0, 0xaf2a, 0, 0, 0, 0x699b, 0x514b, 0x4d4d, 0, 0, 0x699f, 0, 0,
    0, 0, 0xaf2d, 0, 0, 0, 0, 0x6f48, 0, 0, 0xaf2c, 0, 0, 0xaf2e, 0, 0,
    0, 0, 0, 0, 0, 0x6f49, 0, 0, 0, 0xaf2f, 0x69a0, 0x69a1, 0xaf30, 0xaf31, 0x69a2, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0x69a3, 0, 0, 0x4c14, 0x69a4, 0, 0xaf32, 0x6f4a, 0x69a5, 0, 0x4e0f,
    0xaf34, 0x69a6, 0, 0, 0, 0xaf35, 0, 0, 0x69a7, 0, 0, 0x69a8, 0x69a9, 0, 0, 0,
    0, 0x69ac, 0x69aa, 0x579c, 0, 0x69ab, 0, 0x574f, 0, 0, 0, 0xaf36, 0, 0x69ad, 0x6f4b, 0x573b,
    0, 0, 0, 0, 0x6f4c, 0x69ae, 0x53de, 0, 0xaf37, 0x69af, 0x69b1, 0, 0x6f4d, 0x69b2, 0, 0x6f4e,
    0, 0, 0, 0, 0x6f4f, 0x6f50, 0, 0, 0x69b0, 0x4ccd, 0x562d, 0x55c3, 0x5b57, 0xaf39, 0x5ec0, 0x55db,
    0, 0, 0, 0x6f51, 0x490b, 0, 0, 0, 0, 0, 0, 0, 0x69b4, 0x4ab0, 0x69b5, 0x69b6,
    0x69b7, 0x6f52, 0x4cd5, 0, 0x69b8, 0, 0, 0, 0x6034, 0x563b, 0, 0x5143, 0x69b9, 0x69bb, 0x69ba, 0xaf3b,
    0x69bc, 0, 0, 0, 0, 0x69bd, 0, 0xaf3c, 0x69be, 0, 0, 0, 0, 0, 0xaf3d, 0x69bf,
    0, 0, 0, 0, 0x69c0, 0, 0x69c1, 0x69c2, 0, 0x69c3, 0, 0x69c4, 0x69c5, 0x69c6, 0, 0xaf3e,
    0, 0, 0xaf3f, 0xaf41, 0, 0, 0, 0x69c7, 0x69c8, 0, 0, 0, 0, 0, 0x5284, 0,
    0x6f53, 0, 0, 0x4c3d, 0, 0x69ca, 0, 0xaf42, 0, 0xaf43, 0, 0, 0, 0, 0, 0,
    0x50ad, 0x69cb, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x69cc, 0, 0, 0xaf44,
    0, 0, 0, 0, 0, 0, 0, 0xaf45, 0, 0x6f54, 0xaf46, 0x5481, 0, 0xaf47, 0x69cd, 0,
    0, 0xaf48, 0, 0, 0, 0xaf49, 0xaf4a, 0, 0, 0, 0x69ce, 0x6197, 0, 0, 0x663a, 0x684d,
    0, 0, 0x69cf, 0xaf4b, 0x69d0, 0xaf4c, 0, 0x6f55, 0xaf4d, 0, 0, 0, 0, 0xaf4f, 0, 0x69d2,
    0x69d3, 0x69d4, 0x5750, 0x69d1, 0, 0, 0x69d5, 0x69d6, 0, 0xaf51, 0x69d8, 0, 0x69d7, 0xaf53, 0, 0,
    0xaf54, 0, 0x69da, 0, 0, 0xaf55, 0x69db, 0x69d9, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x5716, 0, 0,
    0x6f56, 0, 0, 0, 0x6f57, 0x69dc, 0, 0x6f58, 0, 0, 0, 0, 0x69dd, 0x61b4, 0, 0,
    0x69de, 0, 0x6f59,
];

static ENCODE2: [u16; 3006] = [
    0x4452, 0x4453, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x45a6, 0x45a7, 0x45b0, 0x45b1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x409e, 0, 0, 0x41dc, 0x409d, 0, 0x40a2, 0, 0x40a6, 0x40a7, 0, 0, 0x40a8, 0x40a9,
    0, 0, 0x4157, 0x4158, 0x41a0, 0, 0, 0x40a5, 0x40a4, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x4153, 0, 0x40cc, 0x40cd, 0, 0, 0, 0, 0, 0, 0, 0x4108, 0x444b, 0,
    0x4091, 0x45b8, 0, 0, 0x465e, 0, 0, 0, 0, 0x444c, 0x444d, 0x444e, 0, 0, 0, 0,
    0, 0, 0, 0x465d, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x4481, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0x40ce, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0x41bd, 0, 0, 0, 0x41bf, 0, 0, 0x46c2, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0x46c4, 0, 0, 0, 0, 0, 0x41c0, 0, 0, 0, 0x4152, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0x41bc, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0x43d8, 0x43d9, 0x43da, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x4695, 0x4696, 0x4697, 0x4698, 0x4699, 0x469a, 0x469b, 0x469c, 0x469d, 0x469e, 0x469f, 0x46b7, 0, 0,
    0, 0, 0x4615, 0x4616, 0x4617, 0x4618, 0x4619, 0x461a, 0x461b, 0x461c, 0x461d, 0x461e, 0x461f, 0x4620, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x410b, 0x410c, 0x410a, 0x410d, 0x4151, 0, 0x4187, 0x4185, 0x4186, 0x4188, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0x4189, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0x412d, 0, 0x412e, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0x418b, 0x418c, 0x418a, 0x418d, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x412f, 0, 0x413f, 0x4130, 0, 0x4127, 0, 0x4140, 0x411a, 0x4126, 0, 0x411b, 0, 0,
    0, 0, 0, 0, 0x40bd, 0x41bb, 0, 0, 0, 0, 0, 0, 0x4145, 0, 0, 0x4147,
    0x40c7, 0x46d8, 0x413c, 0, 0, 0, 0, 0x4134, 0x4135, 0x412a, 0x412b, 0x4121, 0x4120, 0x4149, 0x414a, 0,
    0x46d3, 0, 0, 0, 0, 0, 0x40c8, 0x4148, 0, 0, 0, 0, 0, 0, 0, 0x4146,
    0, 0, 0, 0, 0, 0x414c, 0, 0x414d, 0, 0, 0x414e, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0x4142, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x40c2, 0x4141, 0x414b, 0, 0, 0, 0x40c5, 0x40c6, 0, 0, 0x4143, 0x4144, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0x414f, 0x4150, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0x411e, 0x411f, 0x4122, 0x4123, 0x411c, 0x411d, 0, 0, 0x4124, 0x4125, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0x4131, 0x4132, 0x4133, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0x413d, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0x46d9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x43d6, 0x43d7, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0x4128, 0x4129, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0x413e, 0, 0, 0, 0, 0, 0x43dc, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0x43a2, 0x43a3, 0x43a4, 0x43a5, 0x43a6, 0x43a7, 0x43a8, 0x43a9, 0x43aa, 0x43ab, 0x43ac, 0x43ad, 0x43ae, 0x43af, 0x43b0, 0,
    0x43de, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0x43dd, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x4681, 0x4682, 0x4683, 0x4684, 0x4685, 0x4686, 0x4687, 0x4688, 0x4689, 0x468a, 0x468b, 0x468c, 0x468d, 0x468e,
    0x468f, 0x4690, 0x4691, 0x4692, 0x4693, 0x4694, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x4621, 0x4622, 0x4623, 0x4624, 0x4625, 0x4626, 0x4627, 0x4628, 0x4629, 0x462a, 0x462b, 0x462c, 0x462d, 0x462e,
    0x462f, 0x4630, 0x4631, 0x4632, 0x4633, 0x4634, 0x4635, 0x4636, 0x4637, 0x4638, 0x4639, 0x463a, 0, 0x460b, 0x460c, 0x460d,
    0x460e, 0x460f, 0x4610, 0x4611, 0x4612, 0x4613, 0x4614, 0x433a, 0x433b, 0x433c, 0x433d, 0x433e, 0x433f, 0x4340, 0x4341, 0x4342,
    0x4343, 0, 0x4401, 0x440c, 0x4402, 0x440d, 0, 0, 0, 0, 0, 0, 0, 0, 0x4403, 0,
    0, 0x440e, 0x4404, 0, 0, 0x440f, 0x4406, 0, 0, 0x4411, 0x4405, 0, 0, 0x4410, 0x4407, 0x441c,
    0, 0, 0x4417, 0, 0, 0x4412, 0x4409, 0x441e, 0, 0, 0x4419, 0, 0, 0x4414, 0x4408, 0,
    0, 0x4418, 0x441d, 0, 0, 0x4413, 0x440a, 0, 0, 0x441a, 0x441f, 0, 0, 0x4415, 0x440b, 0,
    0, 0x441b, 0, 0, 0x4420, 0, 0, 0, 0, 0, 0, 0, 0, 0x4416, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x4103, 0x4102, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0x434d, 0x4105, 0x4104, 0, 0, 0x4182, 0x4181, 0, 0, 0, 0, 0x4107, 0x4106,
    0, 0, 0x4184, 0x4183, 0, 0, 0, 0, 0x4101, 0x40de, 0, 0x419b, 0, 0x40db, 0, 0,
    0x40dd, 0x40dc, 0x4447, 0x4448, 0x4449, 0x444a, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0x419f, 0, 0, 0, 0, 0, 0, 0,
    0, 0x415e, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x4348, 0x4349, 0x434a, 0x434b, 0, 0x40da, 0x40d9, 0, 0, 0, 0, 0, 0, 0,
    0x4347, 0, 0, 0, 0, 0, 0, 0, 0x4344, 0x4345, 0, 0, 0, 0, 0, 0,
    0x46de, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x40ca, 0, 0x40c9, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x431a, 0x431d, 0x431b, 0x4320, 0x4319, 0x431e, 0x431c, 0x431f, 0x434c, 0x415d, 0x4156, 0x415b, 0x415c, 0x4155,
    0x415a, 0x4154, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0x43db, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0x46dd, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0x4601, 0x4602, 0x4603, 0x4604, 0x4605, 0x4606, 0x4607, 0x4608,
    0x4609, 0x460a, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0x418e, 0x418f, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0x4136, 0x4137, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0x419a, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x41dd, 0x41de,
];

static ENCODE3: [u16; 1602] = [
    0x6b1b, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x6a0e, 0x6aae, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0x6daf, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0x6b29, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0x6f04, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x6ebd,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x47ab, 0x47b7, 0x57d2, 0, 0x8759, 0x6ada, 0x6bba, 0x6bcf, 0, 0, 0x6c9c, 0x6c9d, 0x6ca1, 0,
    0, 0, 0x6d9a, 0xab98, 0xaba5, 0x6e0e, 0, 0xacce, 0, 0x6e4a, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0x4718, 0x4729, 0x4730, 0x4743, 0x4748, 0x474e, 0x478c, 0x478f, 0x4796, 0x47ba, 0x47be, 0x57c1, 0x57c2,
    0x6a30, 0x6a3c, 0x6a3e, 0x6a41, 0x6a88, 0x6a8b, 0x6aa3, 0x6ac5, 0x6b49, 0x6b57, 0x6b85, 0x6bb5, 0xa809, 0x6c05, 0x6c87, 0x6c93,
    0x6c94, 0x6c97, 0x6c98, 0x6c99, 0x6c9b, 0x6c9f, 0x6ca0, 0x6cad, 0x6cb1, 0x6cc4, 0x6d0e, 0xaa30, 0x6d13, 0x6d1a, 0x6d24, 0x6d38,
    0xaad4, 0xaad5, 0x6d87, 0x6dcf, 0x6dd9, 0x6e0f, 0x6e10, 0x6e18, 0x6e1d, 0xacc9, 0x6e39, 0x6ec3, 0x6ed6, 0x6edb, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0x419e, 0x419d, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0x408a, 0x4110, 0x40d4, 0x40d0, 0x40d3, 0x40d5, 0x410f, 0x40aa, 0x40ab, 0x40d6, 0x40bc, 0x4084,
    0x4111, 0x4085, 0x409f, 0x4190, 0x4191, 0x4192, 0x4193, 0x4194, 0x4195, 0x4196, 0x4197, 0x4198, 0x4199, 0x4087, 0x4088, 0x40c3,
    0x40c1, 0x40c4, 0x4089, 0x40d7, 0x41a1, 0x41a2, 0x41a3, 0x41a4, 0x41a5, 0x41a6, 0x41a7, 0x41a8, 0x41a9, 0x41aa, 0x41ab, 0x41ac,
    0x41ad, 0x41ae, 0x41af, 0x41b0, 0x41b1, 0x41b2, 0x41b3, 0x41b4, 0x41b5, 0x41b6, 0x41b7, 0x41b8, 0x41b9, 0x41ba, 0x40ae, 0x40a0,
    0x40af, 0x4090, 0x4092, 0x408e, 0x41c1, 0x41c2, 0x41c3, 0x41c4, 0x41c5, 0x41c6, 0x41c7, 0x41c8, 0x41c9, 0x41ca, 0x41cb, 0x41cc,
    0x41cd, 0x41ce, 0x41cf, 0x41d0, 0x41d1, 0x41d2, 0x41d3, 0x41d4, 0x41d5, 0x41d6, 0x41d7, 0x41d8, 0x41d9, 0x41da, 0x40b0, 0x40a3,
    0x40b1, 0x4112,
];

static ENCODE4: [u16; 946] = [
    0x4482, 0x4483, 0x40d1, 0x40d2, 0x4484, 0x40cf, 0x4485, 0x40d8, 0x408f, 0x4486, 0x4487, 0x4488, 0x412c, 0x4489, 0x448a, 0x448b,
    0x40cb, 0x40be, 0x448c, 0x448d, 0x408d, 0, 0x4159, 0x448e, 0x448f, 0x4490, 0x4491, 0x4492, 0x4493, 0x4494, 0x4495, 0x4496,
    0x4497, 0x4498, 0x4499, 0x449a, 0x449b, 0x449c, 0x449d, 0x449e, 0x449f, 0x44a0, 0x44a1, 0x44a2, 0x44a3, 0x44a4, 0x44a5, 0x44a6,
    0x44a7, 0x44a8, 0x44a9, 0x44aa, 0x44ab, 0x44ac, 0x44ad, 0x40bf, 0x44ae, 0x44af, 0x44b0, 0x44b1, 0x44b2, 0x44b3, 0x44b4, 0x44b5,
    0x44b6, 0x44b7, 0x44b8, 0x44b9, 0x44ba, 0x44bb, 0x44bc, 0x44bd, 0x44be, 0x44bf, 0x44c0, 0x44c1, 0x44c2, 0x44c3, 0x44c4, 0x44c5,
    0x44c6, 0x44c7, 0x44c8, 0x44c9, 0x44ca, 0x44cb, 0x44cc, 0x40c0, 0x44cd, 0x44ce, 0x44cf, 0x44d0, 0x44d1, 0x44d2, 0x44d3, 0x44d4,
    0x44d5, 0x44da, 0x451a, 0x4529, 0x4501, 0x450c, 0x451c, 0x452b, 0x4539, 0x453f, 0, 0, 0x451d, 0x452c, 0x4520, 0x452f,
    0, 0x4530, 0x44d8, 0x44dd, 0, 0, 0, 0, 0x451e, 0x452d, 0x451f, 0x452e, 0x453a, 0x4540, 0, 0,
    0, 0, 0, 0, 0x453b, 0x4541, 0, 0x455d, 0, 0, 0x44d6, 0x44db, 0, 0, 0, 0,
    0, 0, 0, 0, 0x453c, 0x4542, 0, 0, 0, 0x451b, 0x452a, 0, 0, 0x4504, 0x450f, 0,
    0, 0x4503, 0x450e, 0x4521, 0x4531, 0, 0, 0x4522, 0x4532, 0, 0, 0x455a, 0x44d9, 0x44de, 0, 0,
    0x4523, 0x4533, 0x458b, 0x458a, 0x4519, 0x4528, 0, 0, 0x4524, 0x4534, 0x4505, 0x4510, 0x453d, 0x4543, 0x4507, 0x4513,
    0x4506, 0x4512, 0x4527, 0x4537, 0x4508, 0x4514, 0, 0, 0, 0, 0x44d7, 0x44dc, 0x453e, 0x4544, 0x4525, 0x4535,
    0x4526, 0x4536, 0, 0, 0, 0, 0, 0, 0, 0x4509, 0x4515, 0x450b, 0x4518, 0x450a, 0x4517, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0x4589, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0x4584, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0x444f, 0x4450, 0,
    0x4451, 0x4456, 0x4457, 0, 0x4458, 0, 0x4459, 0, 0x445a, 0, 0x445b, 0, 0x445c, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0x4454, 0x4455, 0, 0, 0, 0x45a5, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0x4593, 0x4599, 0x459a, 0x4585, 0x4598, 0x459f, 0x454e, 0x4586, 0x458e, 0x4590, 0x45a3, 0, 0x4591, 0, 0x4592, 0x4555,
    0x4588, 0x4559, 0, 0, 0x4596, 0x459c, 0x4582, 0x45a2, 0x458c, 0, 0, 0, 0x454a, 0x4554, 0x454b, 0x4594,
    0x455b, 0x4545, 0x4556, 0x454f, 0, 0x458f, 0, 0, 0, 0x454c, 0x45a1, 0x4553, 0, 0x4550, 0x4547, 0,
    0, 0x455c, 0x4551, 0x4548, 0x4587, 0, 0, 0, 0x454d, 0x458d, 0x4595, 0x4546, 0x4597, 0x459b, 0x4558, 0,
    0x4552, 0x45a0, 0x4549, 0, 0x4581, 0x455e, 0, 0, 0x4583, 0, 0, 0, 0, 0x4557, 0, 0,
    0, 0x459e, 0x459d, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0x4511, 0x45b3, 0, 0, 0, 0x45b4, 0, 0, 0,
    0x45b5, 0x45b6, 0, 0, 0, 0, 0, 0, 0x4502, 0x4538, 0, 0x450d, 0, 0x4516, 0x45d1, 0,
    0, 0, 0, 0, 0, 0x45c0, 0x45c1, 0x45c2, 0x45c3, 0x45c4, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0x45bc, 0x45ba, 0x45bf, 0x45dd, 0x45bb, 0, 0x45b7, 0, 0x45cd, 0, 0, 0x45b9, 0x45be, 0, 0, 0x45bd,
    0, 0, 0, 0, 0, 0, 0, 0, 0x45d8, 0x45d9, 0x45de, 0, 0x45ca, 0x45d6, 0x45d7, 0x45cb,
    0x45cc, 0, 0, 0, 0x45d2, 0x45c7, 0, 0, 0, 0x45cf, 0x45da, 0, 0x45c8, 0, 0, 0x45d0,
    0x45d3, 0, 0, 0, 0x45d5, 0, 0, 0, 0, 0x45c9, 0x45db, 0x45dc, 0x45d4, 0x45ce, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0x45b2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0x4301, 0x4302, 0x4303, 0x4304, 0x4305, 0x4306, 0x4307, 0x4308, 0x4309, 0x430a, 0x430b, 0x430c, 0x430d, 0x430e, 0x430f,
    0x4310, 0x4311, 0, 0x4312, 0x4313, 0x4314, 0x4315, 0x4316, 0x4317, 0x4318, 0, 0, 0, 0, 0, 0,
    0, 0x4321, 0x4322, 0x4323, 0x4324, 0x4325, 0x4326, 0x4327, 0x4328, 0x4329, 0x432a, 0x432b, 0x432c, 0x432d, 0x432e, 0x432f,
    0x4330, 0x4331, 0x4339, 0x4332, 0x4333, 0x4334, 0x4335, 0x4336, 0x4337, 0x4338, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0x4387, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0x4381, 0x4382, 0x4383, 0x4384, 0x4385, 0x4386, 0x4388, 0x4389, 0x438a, 0x438b, 0x438c, 0x438d, 0x438e, 0x438f, 0x4390, 0x4391,
    0x4392, 0x4393, 0x4394, 0x4395, 0x4396, 0x4397, 0x4398, 0x4399, 0x439a, 0x439b, 0x439c, 0x439d, 0x439e, 0x439f, 0x43a0, 0x43a1,
    0x43b1, 0x43b2, 0x43b3, 0x43b4, 0x43b5, 0x43b6, 0x43b8, 0x43b9, 0x43ba, 0x43bb, 0x43bc, 0x43bd, 0x43be, 0x43bf, 0x43c0, 0x43c1,
    0x43c2, 0x43c3, 0x43c4, 0x43c5, 0x43c6, 0x43c7, 0x43c8, 0x43c9, 0x43ca, 0x43cb, 0x43cc, 0x43cd, 0x43ce, 0x43cf, 0x43d0, 0x43d1,
    0, 0x43b7,
];

/// Base-plus-combining-mark sequences and their packed coordinates.
pub(crate) static MULTICHARS: [(char, char, u16); 25] = [
    ('\u{00E6}', '\u{0300}', 0x45a4),
    ('\u{0254}', '\u{0300}', 0x45a8),
    ('\u{0254}', '\u{0301}', 0x45a9),
    ('\u{0259}', '\u{0300}', 0x45ac),
    ('\u{0259}', '\u{0301}', 0x45ad),
    ('\u{025A}', '\u{0300}', 0x45ae),
    ('\u{025A}', '\u{0301}', 0x45af),
    ('\u{028C}', '\u{0300}', 0x45aa),
    ('\u{028C}', '\u{0301}', 0x45ab),
    ('\u{02E5}', '\u{02E9}', 0x45c6),
    ('\u{02E9}', '\u{02E5}', 0x45c5),
    ('\u{304B}', '\u{309A}', 0x4257),
    ('\u{304D}', '\u{309A}', 0x4258),
    ('\u{304F}', '\u{309A}', 0x4259),
    ('\u{3051}', '\u{309A}', 0x425a),
    ('\u{3053}', '\u{309A}', 0x425b),
    ('\u{30AB}', '\u{309A}', 0x42d7),
    ('\u{30AD}', '\u{309A}', 0x42d8),
    ('\u{30AF}', '\u{309A}', 0x42d9),
    ('\u{30B1}', '\u{309A}', 0x42da),
    ('\u{30B3}', '\u{309A}', 0x42db),
    ('\u{30BB}', '\u{309A}', 0x42dc),
    ('\u{30C4}', '\u{309A}', 0x42dd),
    ('\u{30C8}', '\u{309A}', 0x42de),
    ('\u{31F7}', '\u{309A}', 0x4358),
];
