//! Embedded reference tables.
//!
//! Authored order is significant: culture adjectives are tried in the order
//! listed, and historical names are listed longest first so that the most
//! specific name contained in a phrase wins.

/// Country name, latitude, longitude.
pub(crate) static COUNTRIES: &[(&str, f64, f64)] = &[
    ("United States", 37.0902, -95.7129),
    ("France", 46.2276, 2.2137),
    ("United Kingdom", 55.3781, -3.436),
    ("Italy", 41.8719, 12.5674),
    ("China", 35.8617, 104.1954),
    ("Japan", 36.2048, 138.2529),
    ("Germany", 51.1657, 10.4515),
    ("Spain", 40.4637, -3.7492),
    ("Egypt", 26.8206, 30.8025),
    ("India", 20.5937, 78.9629),
    ("Russia", 61.524, 105.3188),
    ("Canada", 56.1304, -106.3468),
    ("Mexico", 23.6345, -102.5528),
    ("Brazil", -14.235, -51.9253),
    ("Australia", -25.2744, 133.7751),
    ("Turkey", 38.9637, 35.2433),
    ("Greece", 39.0742, 21.8243),
    ("South Korea", 35.9078, 127.7669),
    ("Netherlands", 52.1326, 5.2913),
    ("Sweden", 60.1282, 18.6435),
    ("Switzerland", 46.8182, 8.2275),
    ("Austria", 47.5162, 14.5501),
    ("Belgium", 50.5039, 4.4699),
    ("Denmark", 56.2639, 9.5018),
    ("Norway", 60.472, 8.4689),
    ("Finland", 61.9241, 25.7482),
    ("Poland", 51.9194, 19.1451),
    ("Portugal", 39.3999, -8.2245),
    ("Iran", 32.4279, 53.688),
    ("Iraq", 33.2232, 43.6793),
    ("Syria", 34.8021, 38.9968),
    ("Israel", 31.0461, 34.8516),
    ("Saudi Arabia", 23.8859, 45.0792),
    ("Morocco", 31.7917, -7.0926),
    ("Algeria", 28.0339, 1.6596),
    ("Tunisia", 33.8869, 9.5375),
    ("South Africa", -30.5595, 22.9375),
    ("Nigeria", 9.082, 8.6753),
    ("Ethiopia", 9.145, 40.4897),
    ("Kenya", 0.0236, 37.9062),
    ("Thailand", 15.87, 100.9925),
    ("Vietnam", 14.0583, 108.2772),
    ("Philippines", 12.8797, 121.774),
    ("Indonesia", -0.7893, 113.9213),
    ("Malaysia", 4.2105, 101.9758),
    ("Singapore", 1.3521, 103.8198),
    ("New Zealand", -40.9006, 174.886),
    ("Argentina", -38.4161, -63.6167),
    ("Chile", -35.6751, -71.543),
    ("Peru", -9.19, -75.0152),
    ("Colombia", 4.5709, -74.2973),
    ("Afghanistan", 33.9391, 67.71),
    ("Pakistan", 30.3753, 69.3451),
    ("Bangladesh", 23.685, 90.3563),
    ("Myanmar", 21.9162, 95.956),
    ("Cambodia", 12.5657, 104.991),
    ("Costa Rica", 9.7489, -83.7534),
    ("Albania", 41.1533, 20.1683),
    ("Andorra", 42.5063, 1.5218),
    ("Angola", -11.2027, 17.8739),
    ("Antigua and Barbuda", 17.0608, -61.7964),
    ("Armenia", 40.0691, 45.0382),
    ("Azerbaijan", 40.1431, 47.5769),
    ("Bahamas", 25.0343, -77.3963),
    ("Bahrain", 26.0667, 50.5577),
    ("Barbados", 13.1939, -59.5432),
    ("Belarus", 53.7098, 27.9534),
    ("Belize", 17.1899, -88.4976),
    ("Benin", 9.3077, 2.3158),
    ("Bhutan", 27.5142, 90.4336),
    ("Bolivia", -16.2902, -63.5887),
    ("Bosnia and Herzegovina", 43.9159, 17.6791),
    ("Botswana", -22.3285, 24.6849),
    ("Brunei", 4.5353, 114.7277),
    ("Bulgaria", 42.7339, 25.4858),
    ("Burkina Faso", 12.2383, -1.5616),
    ("Burundi", -3.3731, 29.9189),
    ("Cameroon", 7.3697, 12.3547),
    ("Cape Verde", 16.5388, -23.0418),
    ("Central African Republic", 6.6111, 20.9394),
    ("Chad", 15.4542, 18.7322),
    ("Comoros", -11.875, 43.8722),
    ("Congo", -0.228, 15.8277),
    ("Croatia", 45.1, 15.2),
    ("Cuba", 21.5218, -77.7812),
    ("Cyprus", 35.1264, 33.4299),
    ("Czech Republic", 49.8175, 15.473),
    ("Djibouti", 11.8251, 42.5903),
    ("Dominica", 15.415, -61.371),
    ("Dominican Republic", 18.7357, -70.1627),
    ("Ecuador", -1.8312, -78.1834),
    ("El Salvador", 13.7942, -88.8965),
    ("Equatorial Guinea", 1.6508, 10.2679),
    ("Eritrea", 15.1794, 39.7823),
    ("Estonia", 58.5953, 25.0136),
    ("Eswatini", -26.5225, 31.4659),
    ("Fiji", -17.7134, 178.065),
    ("Gabon", -0.8037, 11.6094),
    ("Gambia", 13.4432, -15.3101),
    ("Georgia", 42.3154, 43.3569),
    ("Ghana", 7.9465, -1.0232),
    ("Grenada", 12.1165, -61.679),
    ("Guatemala", 15.7835, -90.2308),
    ("Guinea", 9.9456, -9.6966),
    ("Guinea-Bissau", 11.8037, -15.1804),
    ("Guyana", 4.8604, -58.9302),
    ("Haiti", 18.9712, -72.2852),
    ("Honduras", 15.2, -86.2419),
    ("Hungary", 47.1625, 19.5033),
    ("Iceland", 64.9631, -19.0208),
    ("Ireland", 53.4129, -8.2439),
    ("Jamaica", 18.1096, -77.2975),
    ("Jordan", 30.5852, 36.2384),
    ("Kazakhstan", 48.0196, 66.9237),
    ("Kiribati", -3.3704, -168.734),
    ("Korea", 35.9078, 127.7669),
    ("Kuwait", 29.3117, 47.4818),
    ("Kyrgyzstan", 41.2044, 74.7661),
    ("Laos", 19.8563, 102.4955),
    ("Latvia", 56.8796, 24.6032),
    ("Lebanon", 33.8547, 35.8623),
    ("Lesotho", -29.6099, 28.2336),
    ("Liberia", 6.4281, -9.4295),
    ("Libya", 26.3351, 17.2283),
    ("Liechtenstein", 47.166, 9.5554),
    ("Lithuania", 55.1694, 23.8813),
    ("Luxembourg", 49.8153, 6.1296),
    ("Madagascar", -18.7669, 46.8691),
    ("Malawi", -13.2543, 34.3015),
    ("Maldives", 3.2028, 73.2207),
    ("Mali", 17.5707, -3.9962),
    ("Malta", 35.9375, 14.3754),
    ("Marshall Islands", 7.1315, 171.1845),
    ("Mauritania", 21.0079, -10.9408),
    ("Mauritius", -20.3484, 57.5522),
    ("Micronesia", 7.4256, 150.5508),
    ("Moldova", 47.4116, 28.3699),
    ("Monaco", 43.7384, 7.4246),
    ("Mongolia", 46.8625, 103.8467),
    ("Montenegro", 42.7087, 19.3744),
    ("Mozambique", -18.6657, 35.5296),
    ("Namibia", -22.9576, 18.4904),
    ("Nauru", -0.5228, 166.9315),
    ("Nepal", 28.3949, 84.124),
    ("Nicaragua", 12.8654, -85.2072),
    ("Niger", 17.6078, 8.0817),
    ("North Korea", 40.3399, 127.5101),
    ("North Macedonia", 41.6086, 21.7453),
    ("Oman", 21.5126, 55.9233),
    ("Palau", 7.515, 134.5825),
    ("Panama", 8.538, -80.7821),
    ("Papua New Guinea", -6.3149, 143.9555),
    ("Paraguay", -23.4425, -58.4438),
    ("Qatar", 25.3548, 51.1839),
    ("Romania", 45.9432, 24.9668),
    ("Rwanda", -1.9403, 29.8739),
    ("Saint Kitts and Nevis", 17.3578, -62.783),
    ("Saint Lucia", 13.9094, -60.9789),
    ("Saint Vincent and the Grenadines", 12.9843, -61.2872),
    ("Samoa", -13.759, -172.1046),
    ("San Marino", 43.9424, 12.4578),
    ("Sao Tome and Principe", 0.1864, 6.6131),
    ("Senegal", 14.4974, -14.4524),
    ("Serbia", 44.0165, 21.0059),
    ("Seychelles", -4.6796, 55.492),
    ("Sierra Leone", 8.4606, -11.7799),
    ("Slovakia", 48.669, 19.699),
    ("Slovenia", 46.1512, 14.9955),
    ("Solomon Islands", -9.6457, 160.1562),
    ("Somalia", 5.1521, 46.1996),
    ("South Sudan", 6.877, 31.307),
    ("Sri Lanka", 7.8731, 80.7718),
    ("Sudan", 12.8628, 30.2176),
    ("Suriname", 3.9193, -56.0278),
    ("Taiwan", 23.6978, 120.9605),
    ("Tajikistan", 38.861, 71.2761),
    ("Tanzania", -6.369, 34.8888),
    ("Timor-Leste", -8.8742, 125.7275),
    ("Togo", 8.6195, 0.8248),
    ("Tonga", -21.179, -175.1982),
    ("Trinidad and Tobago", 10.6918, -61.2225),
    ("Turkmenistan", 38.9697, 59.5563),
    ("Tuvalu", -7.1095, 177.6493),
    ("Uganda", 1.3733, 32.2903),
    ("Ukraine", 48.3794, 31.1656),
    ("United Arab Emirates", 23.4241, 53.8478),
    ("Uruguay", -32.5228, -55.7658),
    ("Uzbekistan", 41.3775, 64.5853),
    ("Vanuatu", -15.3767, 166.9592),
    ("Vatican City", 41.9029, 12.4534),
    ("Venezuela", 6.4238, -66.5897),
    ("Yemen", 15.5527, 48.5164),
    ("Zambia", -13.1339, 27.8493),
    ("Zimbabwe", -19.0154, 29.1549),
    ("Democratic Republic of the Congo", -4.0383, 21.7587),
    ("East Timor", -8.8742, 125.7275),
    ("Hong Kong", 22.3193, 114.1694),
    ("Ivory Coast", 7.54, -5.5471),
    ("Kosovo", 42.6026, 20.903),
    ("Palestine", 31.9522, 35.2332),
    ("Puerto Rico", 18.2208, -66.5901),
    ("São Tomé and Príncipe", 0.1864, 6.6131),
];

/// Culture adjective, country name.
pub(crate) static CULTURES: &[(&str, &str)] = &[
    ("American", "United States"),
    ("Canadian", "Canada"),
    ("Mexican", "Mexico"),
    ("Cuban", "Cuba"),
    ("Jamaican", "Jamaica"),
    ("Haitian", "Haiti"),
    ("Dominican", "Dominican Republic"),
    ("Puerto Rican", "Puerto Rico"),
    ("Bahamian", "Bahamas"),
    ("Belizean", "Belize"),
    ("Costa Rican", "Costa Rica"),
    ("Guatemalan", "Guatemala"),
    ("Honduran", "Honduras"),
    ("Nicaraguan", "Nicaragua"),
    ("Panamanian", "Panama"),
    ("Salvadoran", "El Salvador"),
    ("Brazilian", "Brazil"),
    ("Argentine", "Argentina"),
    ("Argentinian", "Argentina"),
    ("Argentinean", "Argentina"),
    ("Chilean", "Chile"),
    ("Colombian", "Colombia"),
    ("Ecuadorian", "Ecuador"),
    ("Paraguayan", "Paraguay"),
    ("Peruvian", "Peru"),
    ("Uruguayan", "Uruguay"),
    ("Venezuelan", "Venezuela"),
    ("Bolivian", "Bolivia"),
    ("Guyanese", "Guyana"),
    ("Surinamese", "Suriname"),
    ("British", "United Kingdom"),
    ("English", "United Kingdom"),
    ("Scottish", "United Kingdom"),
    ("Welsh", "United Kingdom"),
    ("Irish", "Ireland"),
    ("French", "France"),
    ("German", "Germany"),
    ("Italian", "Italy"),
    ("Spanish", "Spain"),
    ("Portuguese", "Portugal"),
    ("Dutch", "Netherlands"),
    ("Belgian", "Belgium"),
    ("Luxembourgish", "Luxembourg"),
    ("Swiss", "Switzerland"),
    ("Austrian", "Austria"),
    ("Liechtensteiner", "Liechtenstein"),
    ("Monégasque", "Monaco"),
    ("Monacan", "Monaco"),
    ("Danish", "Denmark"),
    ("Finnish", "Finland"),
    ("Icelandic", "Iceland"),
    ("Norwegian", "Norway"),
    ("Swedish", "Sweden"),
    ("Estonian", "Estonia"),
    ("Latvian", "Latvia"),
    ("Lithuanian", "Lithuania"),
    ("Polish", "Poland"),
    ("Czech", "Czech Republic"),
    ("Czechoslovakian", "Czech Republic"),
    ("Slovak", "Slovakia"),
    ("Hungarian", "Hungary"),
    ("Romanian", "Romania"),
    ("Bulgarian", "Bulgaria"),
    ("Moldovan", "Moldova"),
    ("Ukrainian", "Ukraine"),
    ("Belarusian", "Belarus"),
    ("Russian", "Russia"),
    ("Slovenian", "Slovenia"),
    ("Slovene", "Slovenia"),
    ("Croatian", "Croatia"),
    ("Bosnian", "Bosnia and Herzegovina"),
    ("Serbian", "Serbia"),
    ("Macedonian", "North Macedonia"),
    ("Kosovar", "Kosovo"),
    ("Albanian", "Albania"),
    ("Greek", "Greece"),
    ("Maltese", "Malta"),
    ("Cypriot", "Cyprus"),
    ("Turkish", "Turkey"),
    ("Andorran", "Andorra"),
    ("Sammarinese", "San Marino"),
    ("Vatican", "Vatican City"),
    ("Iranian", "Iran"),
    ("Persian", "Iran"),
    ("Iraqi", "Iraq"),
    ("Syrian", "Syria"),
    ("Lebanese", "Lebanon"),
    ("Israeli", "Israel"),
    ("Palestinian", "Palestine"),
    ("Jordanian", "Jordan"),
    ("Saudi", "Saudi Arabia"),
    ("Saudi Arabian", "Saudi Arabia"),
    ("Yemeni", "Yemen"),
    ("Omani", "Oman"),
    ("Emirati", "United Arab Emirates"),
    ("UAE", "United Arab Emirates"),
    ("Qatari", "Qatar"),
    ("Bahraini", "Bahrain"),
    ("Kuwaiti", "Kuwait"),
    ("Chinese", "China"),
    ("Japanese", "Japan"),
    ("Korean", "South Korea"),
    ("North Korean", "North Korea"),
    ("Mongolian", "Mongolia"),
    ("Taiwanese", "Taiwan"),
    ("Hong Kong", "Hong Kong"),
    ("Indian", "India"),
    ("Pakistani", "Pakistan"),
    ("Bangladeshi", "Bangladesh"),
    ("Sri Lankan", "Sri Lanka"),
    ("Ceylonese", "Sri Lanka"),
    ("Nepalese", "Nepal"),
    ("Nepali", "Nepal"),
    ("Bhutanese", "Bhutan"),
    ("Maldivian", "Maldives"),
    ("Afghan", "Afghanistan"),
    ("Vietnamese", "Vietnam"),
    ("Thai", "Thailand"),
    ("Siamese", "Thailand"),
    ("Cambodian", "Cambodia"),
    ("Khmer", "Cambodia"),
    ("Laotian", "Laos"),
    ("Burmese", "Myanmar"),
    ("Myanmar", "Myanmar"),
    ("Malaysian", "Malaysia"),
    ("Malayan", "Malaysia"),
    ("Singaporean", "Singapore"),
    ("Indonesian", "Indonesia"),
    ("Filipino", "Philippines"),
    ("Philippine", "Philippines"),
    ("Bruneian", "Brunei"),
    ("Timorese", "East Timor"),
    ("Kazakh", "Kazakhstan"),
    ("Uzbek", "Uzbekistan"),
    ("Turkmen", "Turkmenistan"),
    ("Kyrgyz", "Kyrgyzstan"),
    ("Tajik", "Tajikistan"),
    ("Australian", "Australia"),
    ("New Zealand", "New Zealand"),
    ("Kiwi", "New Zealand"),
    ("Papua New Guinean", "Papua New Guinea"),
    ("Fijian", "Fiji"),
    ("Solomon Islander", "Solomon Islands"),
    ("Vanuatuan", "Vanuatu"),
    ("Samoan", "Samoa"),
    ("Tongan", "Tonga"),
    ("Egyptian", "Egypt"),
    ("Libyan", "Libya"),
    ("Tunisian", "Tunisia"),
    ("Algerian", "Algeria"),
    ("Moroccan", "Morocco"),
    ("Sudanese", "Sudan"),
    ("Nigerian", "Nigeria"),
    ("Ghanaian", "Ghana"),
    ("Ivorian", "Ivory Coast"),
    ("Senegalese", "Senegal"),
    ("Malian", "Mali"),
    ("Guinean", "Guinea"),
    ("Beninese", "Benin"),
    ("Togolese", "Togo"),
    ("Sierra Leonean", "Sierra Leone"),
    ("Liberian", "Liberia"),
    ("Mauritanian", "Mauritania"),
    ("Gambian", "Gambia"),
    ("Bissau-Guinean", "Guinea-Bissau"),
    ("Cape Verdean", "Cape Verde"),
    ("Burkinabé", "Burkina Faso"),
    ("Nigerien", "Niger"),
    ("Congolese", "Democratic Republic of the Congo"),
    ("Cameroonian", "Cameroon"),
    ("Chadian", "Chad"),
    ("Central African", "Central African Republic"),
    ("Gabonese", "Gabon"),
    ("Equatorial Guinean", "Equatorial Guinea"),
    ("São Toméan", "São Tomé and Príncipe"),
    ("Ethiopian", "Ethiopia"),
    ("Abyssinian", "Ethiopia"),
    ("Kenyan", "Kenya"),
    ("Ugandan", "Uganda"),
    ("Tanzanian", "Tanzania"),
    ("Rwandan", "Rwanda"),
    ("Burundian", "Burundi"),
    ("Somali", "Somalia"),
    ("Djiboutian", "Djibouti"),
    ("Eritrean", "Eritrea"),
    ("South Sudanese", "South Sudan"),
    ("Seychellois", "Seychelles"),
    ("Mauritian", "Mauritius"),
    ("Comoran", "Comoros"),
    ("South African", "South Africa"),
    ("Namibian", "Namibia"),
    ("Botswanan", "Botswana"),
    ("Zimbabwean", "Zimbabwe"),
    ("Rhodesian", "Zimbabwe"),
    ("Zambian", "Zambia"),
    ("Malawian", "Malawi"),
    ("Mozambican", "Mozambique"),
    ("Angolan", "Angola"),
    ("Swazi", "Eswatini"),
    ("Basotho", "Lesotho"),
    ("Malagasy", "Madagascar"),
    ("Armenian", "Armenia"),
    ("Georgian", "Georgia"),
    ("Azerbaijani", "Azerbaijan"),
    ("Barbadian", "Barbados"),
    ("Antiguan", "Antigua and Barbuda"),
    ("Trinidadian", "Trinidad and Tobago"),
    ("Grenadian", "Grenada"),
    ("Ottoman", "Turkey"),
    ("Byzantine", "Turkey"),
    ("Anatolian", "Turkey"),
    ("Mughal", "India"),
    ("Gujarati", "India"),
    ("Bengali", "India"),
    ("Tamil", "India"),
    ("Rajasthani", "India"),
    ("Kashmiri", "India"),
    ("Safavid", "Iran"),
    ("Qajar", "Iran"),
    ("Sasanian", "Iran"),
    ("Aztec", "Mexico"),
    ("Maya", "Mexico"),
    ("Mixtec", "Mexico"),
    ("Inca", "Peru"),
    ("Andean", "Peru"),
    ("Etruscan", "Italy"),
    ("Roman", "Italy"),
    ("Venetian", "Italy"),
    ("Florentine", "Italy"),
    ("Neapolitan", "Italy"),
    ("Genoese", "Italy"),
    ("Milanese", "Italy"),
    ("Sicilian", "Italy"),
    ("Flemish", "Belgium"),
    ("Walloon", "Belgium"),
    ("Bohemian", "Czech Republic"),
    ("Moravian", "Czech Republic"),
    ("Prussian", "Germany"),
    ("Bavarian", "Germany"),
    ("Saxon", "Germany"),
    ("Austro-Hungarian", "Austria"),
    ("Castilian", "Spain"),
    ("Catalan", "Spain"),
    ("Basque", "Spain"),
    ("Andalusian", "Spain"),
    ("Breton", "France"),
    ("Provençal", "France"),
    ("Norman", "France"),
    ("Tibetan", "China"),
    ("Manchu", "China"),
    ("Cantonese", "China"),
    ("Ryukyuan", "Japan"),
    ("Ainu", "Japan"),
    ("Coptic", "Egypt"),
    ("Nubian", "Sudan"),
    ("Berber", "Morocco"),
    ("Yoruba", "Nigeria"),
    ("Igbo", "Nigeria"),
    ("Hausa", "Nigeria"),
    ("Ashanti", "Ghana"),
    ("Zulu", "South Africa"),
    ("Xhosa", "South Africa"),
    ("Maasai", "Kenya"),
    ("Hawaiian", "United States"),
    ("Native American", "United States"),
    ("Soviet", "Russia"),
    ("Muscovite", "Russia"),
    ("Yugoslav", "Serbia"),
    ("Javanese", "Indonesia"),
    ("Balinese", "Indonesia"),
    ("Sumatran", "Indonesia"),
    ("Hmong", "Laos"),
    ("Māori", "New Zealand"),
    ("Maori", "New Zealand"),
    ("Aboriginal Australian", "Australia"),
    ("Sami", "Norway"),
    ("Faroese", "Denmark"),
    ("Greenlandic", "Denmark"),
    ("Ruthenian", "Ukraine"),
    ("Transylvanian", "Romania"),
    ("Wallachian", "Romania"),
    ("Dalmatian", "Croatia"),
    ("Montenegrin", "Montenegro"),
    ("Uyghur", "China"),
    ("Punjabi", "India"),
    ("Sindhi", "Pakistan"),
    ("Pashtun", "Afghanistan"),
    ("Hazara", "Afghanistan"),
    ("Bedouin", "Saudi Arabia"),
    ("Kuna", "Panama"),
    ("Quechua", "Peru"),
    ("Aymara", "Bolivia"),
    ("Mapuche", "Chile"),
    ("Guarani", "Paraguay"),
    ("Creole", "Haiti"),
    ("Acadian", "Canada"),
    ("Québécois", "Canada"),
    ("Inuit", "Canada"),
];

/// Historical or modern place name, modern country name.
pub(crate) static HISTORICAL_NAMES: &[(&str, &str)] = &[
    ("Viceroyalty of the Río de la Plata", "Argentina"),
    ("Portuguese São Tomé and Príncipe", "Sao Tome and Principe"),
    ("Saint Vincent and the Grenadines", "Saint Vincent and the Grenadines"),
    ("Polish-Lithuanian Commonwealth", "Poland"),
    ("American Colonization Society", "Liberia"),
    ("Captaincy General of Chile", "Chile"),
    ("Grand Duchy of Lithuania", "Lithuania"),
    ("German South-West Africa", "Namibia"),
    ("Central African Republic", "Central African Republic"),
    ("Mauretania Caesariensis", "Algeria"),
    ("Second Bulgarian Empire", "Bulgaria"),
    ("British Solomon Islands", "Solomon Islands"),
    ("First Bulgarian Empire", "Bulgaria"),
    ("Grand Duchy of Finland", "Finland"),
    ("Portuguese East Africa", "Mozambique"),
    ("Republic of San Marino", "San Marino"),
    ("Bosnia and Herzegovina", "Bosnia and Herzegovina"),
    ("Union of South Africa", "South Africa"),
    ("Saint Kitts and Nevis", "Saint Kitts and Nevis"),
    ("Sao Tome and Principe", "Sao Tome and Principe"),
    ("Austrian Netherlands", "Belgium"),
    ("British Sierra Leone", "Sierra Leone"),
    ("United Arab Emirates", "United Arab Emirates"),
    ("Comorian Sultanates", "Comoros"),
    ("British East Africa", "Kenya"),
    ("Viceroyalty of Peru", "Peru"),
    ("Las Islas Filipinas", "Philippines"),
    ("Kingdom of Portugal", "Portugal"),
    ("Antigua and Barbuda", "Antigua and Barbuda"),
    ("Trinidad and Tobago", "Trinidad and Tobago"),
    ("Kingdom of Armenia", "Armenia"),
    ("Kanem-Bornu Empire", "Chad"),
    ("Kingdom of Croatia", "Croatia"),
    ("Kingdom of Georgia", "Georgia"),
    ("Kingdom of Hungary", "Hungary"),
    ("French West Africa", "Mauritania"),
    ("Dominican Republic", "Dominican Republic"),
    ("Kingdom of Ndongo", "Angola"),
    ("Caucasian Albania", "Azerbaijan"),
    ("French Somaliland", "Djibouti"),
    ("Kingdom of France", "France"),
    ("Holy Roman Empire", "Germany"),
    ("Maya Civilization", "Guatemala"),
    ("Portuguese Guinea", "Guinea-Bissau"),
    ("Dutch East Indies", "Indonesia"),
    ("Spanish Nicaragua", "Nicaragua"),
    ("German New Guinea", "Papua New Guinea"),
    ("Kingdom of Rwanda", "Rwanda"),
    ("Saint Christopher", "Saint Kitts and Nevis"),
    ("French Seychelles", "Seychelles"),
    ("Thirteen Colonies", "United States"),
    ("Northern Rhodesia", "Zambia"),
    ("Equatorial Guinea", "Equatorial Guinea"),
    ("Kingdom of Kongo", "Angola"),
    ("British Honduras", "Belize"),
    ("Spanish Honduras", "Honduras"),
    ("Malagasy Kingdom", "Madagascar"),
    ("Caroline Islands", "Micronesia"),
    ("Spanish Paraguay", "Paraguay"),
    ("Portuguese Timor", "Timor-Leste"),
    ("Friendly Islands", "Tonga"),
    ("Spanish Trinidad", "Trinidad and Tobago"),
    ("Marshall Islands", "Marshall Islands"),
    ("Papua New Guinea", "Papua New Guinea"),
    ("Austrian Empire", "Austria"),
    ("Austria-Hungary", "Austria"),
    ("Terra do Brasil", "Brazil"),
    ("Italian Eritrea", "Eritrea"),
    ("Gilbert Islands", "Kiribati"),
    ("Pleasant Island", "Nauru"),
    ("British Nigeria", "Nigeria"),
    ("Slovak Republic", "Slovakia"),
    ("French Togoland", "Togo"),
    ("North Macedonia", "North Macedonia"),
    ("Solomon Islands", "Solomon Islands"),
    ("Constantinople", "Turkey"),
    ("Middle Kingdom", "China"),
    ("Czechoslovakia", "Czech Republic"),
    ("Spanish Guinea", "Equatorial Guinea"),
    ("Ancient Greece", "Greece"),
    ("French Grenada", "Grenada"),
    ("British Guiana", "Guyana"),
    ("Saint-Domingue", "Haiti"),
    ("Kazakh Khanate", "Kazakhstan"),
    ("Kyrgyz Khanate", "Kyrgyzstan"),
    ("British Malaya", "Malaysia"),
    ("Outer Mongolia", "Mongolia"),
    ("Gorkha Kingdom", "Nepal"),
    ("Dutch Republic", "Netherlands"),
    ("Oman Sultanate", "Oman"),
    ("Russian Empire", "Russia"),
    ("French Senegal", "Senegal"),
    ("Serbian Empire", "Serbia"),
    ("Southern Sudan", "South Sudan"),
    ("Ottoman Empire", "Turkey"),
    ("Ellice Islands", "Tuvalu"),
    ("Trucial States", "United Arab Emirates"),
    ("Banda Oriental", "Uruguay"),
    ("Great Zimbabwe", "Zimbabwe"),
    ("Czech Republic", "Czech Republic"),
    ("United Kingdom", "United Kingdom"),
    ("Santo Domingo", "Dominican Republic"),
    ("Gran Colombia", "Ecuador"),
    ("Ancient Egypt", "Egypt"),
    ("French Guinea", "Guinea"),
    ("Mount Lebanon", "Lebanon"),
    ("Île de France", "Mauritius"),
    ("Mongol Empire", "Mongolia"),
    ("Pagan Kingdom", "Myanmar"),
    ("Great Britain", "United Kingdom"),
    ("Guinea-Bissau", "Guinea-Bissau"),
    ("Liechtenstein", "Liechtenstein"),
    ("United States", "United States"),
    ("White Russia", "Belarus"),
    ("Bechuanaland", "Botswana"),
    ("Khmer Empire", "Cambodia"),
    ("Ubangi-Shari", "Central African Republic"),
    ("Spanish Cuba", "Cuba"),
    ("French Congo", "Gabon"),
    ("Ghana Empire", "Ghana"),
    ("Indus Valley", "India"),
    ("Roman Empire", "Italy"),
    ("Tripolitania", "Libya"),
    ("Divehi Rajje", "Maldives"),
    ("French Sudan", "Mali"),
    ("Aztec Empire", "Mexico"),
    ("Monaco-Ville", "Monaco"),
    ("French Niger", "Niger"),
    ("German Samoa", "Samoa"),
    ("Land of Punt", "Somalia"),
    ("Dutch Guiana", "Suriname"),
    ("New Hebrides", "Vanuatu"),
    ("Papal States", "Vatican City"),
    ("Spanish Main", "Venezuela"),
    ("Burkina Faso", "Burkina Faso"),
    ("Saudi Arabia", "Saudi Arabia"),
    ("Sierra Leone", "Sierra Leone"),
    ("South Africa", "South Africa"),
    ("Turkmenistan", "Turkmenistan"),
    ("Vatican City", "Vatican City"),
    ("Tang Dynasty", "China"),
    ("New Holland", "Australia"),
    ("East Bengal", "Bangladesh"),
    ("Herzegovina", "Bosnia and Herzegovina"),
    ("Upper Volta", "Burkina Faso"),
    ("New Granada", "Colombia"),
    ("Medri Bahri", "Eritrea"),
    ("Mesopotamia", "Iraq"),
    ("Transjordan", "Jordan"),
    ("French Laos", "Laos"),
    ("Mali Empire", "Mali"),
    ("Ratak Chain", "Marshall Islands"),
    ("Ralik Chain", "Marshall Islands"),
    ("Inca Empire", "Peru"),
    ("Transoxiana", "Tajikistan"),
    ("Afghanistan", "Afghanistan"),
    ("El Salvador", "El Salvador"),
    ("Netherlands", "Netherlands"),
    ("New Zealand", "New Zealand"),
    ("North Korea", "North Korea"),
    ("Philippines", "Philippines"),
    ("Saint Lucia", "Saint Lucia"),
    ("South Korea", "South Korea"),
    ("South Sudan", "South Sudan"),
    ("Switzerland", "Switzerland"),
    ("Timor-Leste", "Timor-Leste"),
    ("Han Dynasty", "China"),
    ("Upper Peru", "Bolivia"),
    ("New France", "Canada"),
    ("Senegambia", "Gambia"),
    ("Gold Coast", "Ghana"),
    ("Basutoland", "Lesotho"),
    ("Bessarabia", "Moldova"),
    ("Al-Maghrib", "Morocco"),
    ("Mauretania", "Morocco"),
    ("Kievan Rus", "Russia"),
    ("Al-Andalus", "Spain"),
    ("Tanganyika", "Tanzania"),
    ("Azerbaijan", "Azerbaijan"),
    ("Bangladesh", "Bangladesh"),
    ("Cape Verde", "Cape Verde"),
    ("Costa Rica", "Costa Rica"),
    ("Kazakhstan", "Kazakhstan"),
    ("Kyrgyzstan", "Kyrgyzstan"),
    ("Luxembourg", "Luxembourg"),
    ("Madagascar", "Madagascar"),
    ("Mauritania", "Mauritania"),
    ("Micronesia", "Micronesia"),
    ("Montenegro", "Montenegro"),
    ("Mozambique", "Mozambique"),
    ("San Marino", "San Marino"),
    ("Seychelles", "Seychelles"),
    ("Tajikistan", "Tajikistan"),
    ("Uzbekistan", "Uzbekistan"),
    ("Byzantium", "Turkey"),
    ("Cuzcatlan", "El Salvador"),
    ("Swaziland", "Eswatini"),
    ("Abyssinia", "Ethiopia"),
    ("Hindustan", "India"),
    ("Majapahit", "Indonesia"),
    ("Babylonia", "Iraq"),
    ("Palestine", "Israel"),
    ("Phoenicia", "Lebanon"),
    ("Cyrenaica", "Libya"),
    ("Luxemburg", "Luxembourg"),
    ("Nyasaland", "Malawi"),
    ("New Spain", "Mexico"),
    ("Macedonia", "North Macedonia"),
    ("Lusitania", "Portugal"),
    ("Wallachia", "Romania"),
    ("Svea Rike", "Sweden"),
    ("Sukhothai", "Thailand"),
    ("Britannia", "United Kingdom"),
    ("Argentina", "Argentina"),
    ("Australia", "Australia"),
    ("Guatemala", "Guatemala"),
    ("Indonesia", "Indonesia"),
    ("Lithuania", "Lithuania"),
    ("Mauritius", "Mauritius"),
    ("Nicaragua", "Nicaragua"),
    ("Singapore", "Singapore"),
    ("Sri Lanka", "Sri Lanka"),
    ("Venezuela", "Venezuela"),
    ("Khorasan", "Afghanistan"),
    ("Gandhara", "Afghanistan"),
    ("Ruthenia", "Belarus"),
    ("Druk Yul", "Bhutan"),
    ("Zhongguo", "China"),
    ("Alashiya", "Cyprus"),
    ("Aegyptus", "Egypt"),
    ("Germania", "Germany"),
    ("Hibernia", "Ireland"),
    ("Nabataea", "Jordan"),
    ("Lan Xang", "Laos"),
    ("Courland", "Latvia"),
    ("Moldavia", "Moldova"),
    ("Aotearoa", "New Zealand"),
    ("Carniola", "Slovenia"),
    ("Hispania", "Spain"),
    ("Helvetia", "Switzerland"),
    ("Sogdiana", "Tajikistan"),
    ("Zanzibar", "Tanzania"),
    ("Carthage", "Tunisia"),
    ("Ifriqiya", "Tunisia"),
    ("Anatolia", "Turkey"),
    ("Khwarezm", "Uzbekistan"),
    ("Dai Viet", "Vietnam"),
    ("Rhodesia", "Zimbabwe"),
    ("Barbados", "Barbados"),
    ("Botswana", "Botswana"),
    ("Bulgaria", "Bulgaria"),
    ("Cambodia", "Cambodia"),
    ("Cameroon", "Cameroon"),
    ("Colombia", "Colombia"),
    ("Djibouti", "Djibouti"),
    ("Dominica", "Dominica"),
    ("Eswatini", "Eswatini"),
    ("Ethiopia", "Ethiopia"),
    ("Honduras", "Honduras"),
    ("Kiribati", "Kiribati"),
    ("Malaysia", "Malaysia"),
    ("Maldives", "Maldives"),
    ("Mongolia", "Mongolia"),
    ("Pakistan", "Pakistan"),
    ("Paraguay", "Paraguay"),
    ("Portugal", "Portugal"),
    ("Slovakia", "Slovakia"),
    ("Slovenia", "Slovenia"),
    ("Suriname", "Suriname"),
    ("Tanzania", "Tanzania"),
    ("Thailand", "Thailand"),
    ("Zimbabwe", "Zimbabwe"),
    ("Illyria", "Albania"),
    ("Arberia", "Albania"),
    ("Numidia", "Algeria"),
    ("Ostmark", "Austria"),
    ("Belgica", "Belgium"),
    ("Dahomey", "Benin"),
    ("Barunai", "Brunei"),
    ("Kambuja", "Cambodia"),
    ("Kamerun", "Cameroon"),
    ("Bohemia", "Czech Republic"),
    ("Moravia", "Czech Republic"),
    ("Danmark", "Denmark"),
    ("Estland", "Estonia"),
    ("Livonia", "Estonia"),
    ("Francia", "France"),
    ("Colchis", "Georgia"),
    ("Prussia", "Germany"),
    ("Parthia", "Iran"),
    ("Assyria", "Iraq"),
    ("Etruria", "Italy"),
    ("Xaymaca", "Jamaica"),
    ("Holland", "Netherlands"),
    ("Paeonia", "North Macedonia"),
    ("Temasek", "Singapore"),
    ("Formosa", "Taiwan"),
    ("Buganda", "Uganda"),
    ("Albania", "Albania"),
    ("Algeria", "Algeria"),
    ("Andorra", "Andorra"),
    ("Armenia", "Armenia"),
    ("Austria", "Austria"),
    ("Bahamas", "Bahamas"),
    ("Bahrain", "Bahrain"),
    ("Belarus", "Belarus"),
    ("Belgium", "Belgium"),
    ("Bolivia", "Bolivia"),
    ("Burundi", "Burundi"),
    ("Comoros", "Comoros"),
    ("Croatia", "Croatia"),
    ("Denmark", "Denmark"),
    ("Ecuador", "Ecuador"),
    ("Eritrea", "Eritrea"),
    ("Estonia", "Estonia"),
    ("Finland", "Finland"),
    ("Georgia", "Georgia"),
    ("Germany", "Germany"),
    ("Grenada", "Grenada"),
    ("Hungary", "Hungary"),
    ("Iceland", "Iceland"),
    ("Ireland", "Ireland"),
    ("Jamaica", "Jamaica"),
    ("Lebanon", "Lebanon"),
    ("Lesotho", "Lesotho"),
    ("Liberia", "Liberia"),
    ("Moldova", "Moldova"),
    ("Morocco", "Morocco"),
    ("Myanmar", "Myanmar"),
    ("Namibia", "Namibia"),
    ("Nigeria", "Nigeria"),
    ("Romania", "Romania"),
    ("Senegal", "Senegal"),
    ("Somalia", "Somalia"),
    ("Tunisia", "Tunisia"),
    ("Ukraine", "Ukraine"),
    ("Uruguay", "Uruguay"),
    ("Vanuatu", "Vanuatu"),
    ("Vietnam", "Vietnam"),
    ("Ariana", "Afghanistan"),
    ("Urartu", "Armenia"),
    ("Dilmun", "Bahrain"),
    ("Bengal", "Bangladesh"),
    ("Bosnia", "Bosnia and Herzegovina"),
    ("Urundi", "Burundi"),
    ("Iberia", "Georgia"),
    ("Hellas", "Greece"),
    ("Magyar", "Hungary"),
    ("Ísland", "Iceland"),
    ("Bharat", "India"),
    ("Persia", "Iran"),
    ("Canaan", "Israel"),
    ("Italia", "Italy"),
    ("Yamato", "Japan"),
    ("Joseon", "Korea"),
    ("Goryeo", "Korea"),
    ("Qurain", "Kuwait"),
    ("Malaya", "Malaysia"),
    ("Melita", "Malta"),
    ("Duklja", "Montenegro"),
    ("Polska", "Poland"),
    ("Catara", "Qatar"),
    ("Rascia", "Serbia"),
    ("Ceylon", "Sri Lanka"),
    ("Himyar", "Yemen"),
    ("Angola", "Angola"),
    ("Belize", "Belize"),
    ("Bhutan", "Bhutan"),
    ("Brazil", "Brazil"),
    ("Brunei", "Brunei"),
    ("Canada", "Canada"),
    ("Cyprus", "Cyprus"),
    ("France", "France"),
    ("Gambia", "Gambia"),
    ("Greece", "Greece"),
    ("Guinea", "Guinea"),
    ("Guyana", "Guyana"),
    ("Israel", "Israel"),
    ("Jordan", "Jordan"),
    ("Kuwait", "Kuwait"),
    ("Latvia", "Latvia"),
    ("Malawi", "Malawi"),
    ("Mexico", "Mexico"),
    ("Monaco", "Monaco"),
    ("Norway", "Norway"),
    ("Panama", "Panama"),
    ("Poland", "Poland"),
    ("Russia", "Russia"),
    ("Rwanda", "Rwanda"),
    ("Serbia", "Serbia"),
    ("Sweden", "Sweden"),
    ("Taiwan", "Taiwan"),
    ("Turkey", "Turkey"),
    ("Tuvalu", "Tuvalu"),
    ("Uganda", "Uganda"),
    ("Zambia", "Zambia"),
    ("Kosovo", "Kosovo"),
    ("Arran", "Azerbaijan"),
    ("Tylos", "Bahrain"),
    ("Quito", "Ecuador"),
    ("Kemet", "Egypt"),
    ("Aksum", "Ethiopia"),
    ("Suomi", "Finland"),
    ("Judea", "Israel"),
    ("Nihon", "Japan"),
    ("Meiji", "Japan"),
    ("Silla", "Korea"),
    ("Vaduz", "Liechtenstein"),
    ("Burma", "Myanmar"),
    ("Norge", "Norway"),
    ("Noreg", "Norway"),
    ("Magan", "Oman"),
    ("Belau", "Palau"),
    ("Dacia", "Romania"),
    ("Hejaz", "Saudi Arabia"),
    ("Lanka", "Sri Lanka"),
    ("Nubia", "Sudan"),
    ("Annam", "Vietnam"),
    ("Benin", "Benin"),
    ("Chile", "Chile"),
    ("China", "China"),
    ("Congo", "Congo"),
    ("Egypt", "Egypt"),
    ("Gabon", "Gabon"),
    ("Ghana", "Ghana"),
    ("Haiti", "Haiti"),
    ("India", "India"),
    ("Italy", "Italy"),
    ("Japan", "Japan"),
    ("Kenya", "Kenya"),
    ("Korea", "Korea"),
    ("Libya", "Libya"),
    ("Malta", "Malta"),
    ("Nauru", "Nauru"),
    ("Nepal", "Nepal"),
    ("Niger", "Niger"),
    ("Palau", "Palau"),
    ("Qatar", "Qatar"),
    ("Samoa", "Samoa"),
    ("Spain", "Spain"),
    ("Sudan", "Sudan"),
    ("Syria", "Syria"),
    ("Tonga", "Tonga"),
    ("Yemen", "Yemen"),
    ("Qing", "China"),
    ("Ming", "China"),
    ("Gaul", "France"),
    ("Éire", "Ireland"),
    ("Zeta", "Montenegro"),
    ("Najd", "Saudi Arabia"),
    ("Siam", "Thailand"),
    ("Chad", "Chad"),
    ("Cuba", "Cuba"),
    ("Fiji", "Fiji"),
    ("Iran", "Iran"),
    ("Iraq", "Iraq"),
    ("Laos", "Laos"),
    ("Mali", "Mali"),
    ("Oman", "Oman"),
    ("Peru", "Peru"),
    ("Togo", "Togo"),
];
